//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Hogwords".to_string()
}

pub fn default_data_dir() -> String {
    "~/.hogwords".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_session_path() -> String {
    "~/.hogwords/session.json".to_string()
}

pub fn default_source_language() -> String {
    "uz".to_string()
}

pub fn default_target_language() -> String {
    "ru".to_string()
}
