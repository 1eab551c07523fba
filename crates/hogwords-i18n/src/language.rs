use std::fmt;

/// UI language of the built-in `uz -> ru` pair.
///
/// Tags outside that pair are kept as [`Language::Other`]. Callers working
/// with a differently configured pair should resolve an empty tag to their
/// own source language before parsing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Uz,
    Ru,
    /// Any other tag. Translation treats it like the source language.
    Other(String),
}

impl Language {
    /// Parse a language tag such as `uz`, `RU` or `ru-RU`.
    ///
    /// Only the primary subtag is considered. Empty input is `Uz`, the
    /// source language of the built-in pair.
    pub fn parse(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "" | "uz" => Self::Uz,
            "ru" => Self::Ru,
            _ => Self::Other(primary),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Uz => "uz",
            Self::Ru => "ru",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
