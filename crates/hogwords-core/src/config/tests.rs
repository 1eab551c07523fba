use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.hogwords.name, "Hogwords");
    assert_eq!(cfg.hogwords.log_level, "info");
    assert_eq!(cfg.session.path, "~/.hogwords/session.json");
    assert_eq!(cfg.i18n.source_language, "uz");
    assert_eq!(cfg.i18n.target_language, "ru");
    assert_eq!(cfg.i18n.default_language, "uz");
    assert!(cfg.i18n.overlay.is_empty());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let cfg = parse(
        r#"
        [i18n]
        default_language = "ru"
    "#,
    )
    .unwrap();
    assert_eq!(cfg.i18n.default_language, "ru");
    assert_eq!(cfg.i18n.source_language, "uz");
    assert_eq!(cfg.hogwords.data_dir, "~/.hogwords");
}

#[test]
fn test_full_toml() {
    let cfg = parse(
        r#"
        [hogwords]
        name = "Olimp"
        data_dir = "/var/lib/olimp"
        log_level = "debug"

        [session]
        path = "/tmp/session.json"

        [i18n]
        source_language = "uz"
        target_language = "ru"
        default_language = "ru"
        overlay = "/etc/olimp/translations.toml"
    "#,
    )
    .unwrap();
    assert_eq!(cfg.hogwords.name, "Olimp");
    assert_eq!(cfg.hogwords.log_level, "debug");
    assert_eq!(cfg.session.path, "/tmp/session.json");
    assert_eq!(cfg.i18n.overlay, "/etc/olimp/translations.toml");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse("[session\npath = 1").unwrap_err();
    assert!(matches!(err, HogwordsError::Config(_)));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__hogwords_config__.toml").unwrap();
    assert_eq!(cfg.hogwords.name, "Hogwords");
}

#[test]
fn test_load_from_file() {
    let tmp = std::env::temp_dir().join("__hogwords_test_config__");
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("config.toml");
    std::fs::write(&path, "[session]\npath = \"/srv/session.json\"\n").unwrap();

    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.session.path, "/srv/session.json");

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn test_shellexpand_leaves_absolute_paths() {
    assert_eq!(shellexpand("/etc/hogwords"), "/etc/hogwords");
    assert_eq!(shellexpand("relative/path"), "relative/path");
}

#[test]
fn test_shellexpand_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let expanded = shellexpand("~/.hogwords");
        assert_eq!(expanded, format!("{}/.hogwords", home.to_string_lossy()));
    }
}
