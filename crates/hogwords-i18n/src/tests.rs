use super::*;

const KASB: &str = "Kasb tanlanmagan";

#[test]
fn test_seed_entries_translate_to_russian() {
    let map = TranslationMap::with_seed();
    assert_eq!(map.len(), 5);
    assert_eq!(translate(Some(KASB), "ru", &map), "Профессия не выбрана");
    assert_eq!(
        translate(Some("Matematika: Olimpiada Master"), "ru", &map),
        "Математика: Олимпиада Мастер"
    );
}

#[test]
fn test_source_language_returns_source_text() {
    let map = TranslationMap::with_seed();
    assert_eq!(translate(Some(KASB), "uz", &map), KASB);
}

#[test]
fn test_unsupported_language_falls_back_to_source() {
    let map = TranslationMap::with_seed();
    for lang in ["en", "", "RU", "ru-RU", "de"] {
        assert_eq!(translate(Some(KASB), lang, &map), KASB, "lang {lang:?}");
    }
}

#[test]
fn test_unknown_text_is_identity() {
    let map = TranslationMap::with_seed();
    for text in [
        "Fizika",
        "kasb tanlanmagan",
        " Kasb tanlanmagan",
        "Kasb tanlanmagan ",
        "Многочлены и их свойства",
    ] {
        assert_eq!(translate(Some(text), "ru", &map), text);
        assert_eq!(translate(Some(text), "uz", &map), text);
    }
}

#[test]
fn test_absent_text_is_empty() {
    let map = TranslationMap::with_seed();
    assert_eq!(translate(None, "ru", &map), "");
    assert_eq!(translate(None, "uz", &map), "");
    assert_eq!(translate(Some(""), "ru", &map), "");
}

#[test]
fn test_add_entry_then_translate() {
    let mut map = TranslationMap::with_seed();
    map.add_entry("Kimyo", "Химия");
    assert!(map.contains("Kimyo"));
    assert_eq!(translate(Some("Kimyo"), "ru", &map), "Химия");
    assert_eq!(translate(Some("Kimyo"), "uz", &map), "Kimyo");
}

#[test]
fn test_add_entry_overwrites() {
    let mut map = TranslationMap::with_seed();
    map.add_entry(KASB, "Профессия не указана");
    assert_eq!(map.len(), 5);
    assert_eq!(translate(Some(KASB), "ru", &map), "Профессия не указана");
}

#[test]
fn test_empty_map_with_custom_pair() {
    let mut map = TranslationMap::empty("uz", "en");
    assert!(map.is_empty());
    map.add_entry("Salom", "Hello");
    assert_eq!(map.translate(Some("Salom"), "en"), "Hello");
    assert_eq!(map.translate(Some("Salom"), "ru"), "Salom");
    assert_eq!(map.get("Salom").map(|t| t.source.as_str()), Some("Salom"));
}

#[test]
fn test_apply_overlay() {
    let mut map = TranslationMap::with_seed();
    let applied = map
        .apply_overlay(
            r#"
            [entries]
            "Biologiya" = "Биология"
            "Kasb tanlanmagan" = "Профессия не указана"
        "#,
        )
        .unwrap();
    assert_eq!(applied, 2);
    assert_eq!(map.len(), 6);
    assert_eq!(map.translate(Some("Biologiya"), "ru"), "Биология");
    assert_eq!(map.translate(Some(KASB), "ru"), "Профессия не указана");
}

#[test]
fn test_overlay_without_entries_applies_nothing() {
    let mut map = TranslationMap::with_seed();
    assert_eq!(map.apply_overlay("").unwrap(), 0);
    assert_eq!(map.len(), 5);
}

#[test]
fn test_malformed_overlay_is_parse_error() {
    let mut map = TranslationMap::with_seed();
    let err = map.apply_overlay("[entries]\n\"Fizika\" = 7").unwrap_err();
    assert!(matches!(err, I18nError::Parse(_)));
    assert_eq!(map.len(), 5);
}

#[test]
fn test_load_overlay_from_file() {
    let tmp = std::env::temp_dir().join("__hogwords_test_overlay__");
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("translations.toml");
    std::fs::write(&path, "[entries]\n\"Tarix\" = \"История\"\n").unwrap();

    let mut map = TranslationMap::with_seed();
    assert_eq!(map.load_overlay(&path).unwrap(), 1);
    assert_eq!(map.translate(Some("Tarix"), "ru"), "История");

    let missing = map.load_overlay(tmp.join("missing.toml")).unwrap_err();
    assert!(matches!(missing, I18nError::Io(_)));

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn test_language_parse() {
    assert_eq!(Language::parse("uz"), Language::Uz);
    assert_eq!(Language::parse("RU"), Language::Ru);
    assert_eq!(Language::parse("ru-RU"), Language::Ru);
    assert_eq!(Language::parse(" uz_UZ "), Language::Uz);
    assert_eq!(Language::parse(""), Language::Uz);
    assert_eq!(Language::parse("en"), Language::Other("en".to_string()));
    assert_eq!(Language::parse("ru").tag(), "ru");
    assert_eq!(Language::default().to_string(), "uz");
}

#[test]
fn test_for_pair_seeds_only_uz_ru() {
    let seeded = TranslationMap::for_pair("uz", "ru");
    assert_eq!(seeded.len(), 5);
    assert_eq!(seeded.source_language(), "uz");
    assert_eq!(seeded.target_language(), "ru");

    let other = TranslationMap::for_pair("uz", "en");
    assert!(other.is_empty());
    assert_eq!(other.target_language(), "en");
    assert_eq!(other.translate(Some(KASB), "en"), KASB);
}

#[test]
fn test_load_applies_overlay_on_top_of_pair() {
    let tmp = std::env::temp_dir().join("__hogwords_test_load_pair__");
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("translations.toml");
    std::fs::write(&path, "[entries]\n\"Salom\" = \"Hello\"\n").unwrap();
    let path = path.to_str().unwrap();

    let seeded = TranslationMap::load("uz", "ru", Some(path)).unwrap();
    assert_eq!(seeded.len(), 6);
    assert_eq!(seeded.translate(Some(KASB), "ru"), "Профессия не выбрана");

    let english = TranslationMap::load("uz", "en", Some(path)).unwrap();
    assert_eq!(english.len(), 1);
    assert_eq!(english.translate(Some("Salom"), "en"), "Hello");
    assert_eq!(english.translate(Some(KASB), "en"), KASB);

    let bare = TranslationMap::load("uz", "ru", None).unwrap();
    assert_eq!(bare.len(), 5);

    assert!(TranslationMap::load("uz", "ru", Some("/nonexistent/__hogwords__.toml")).is_err());

    let _ = std::fs::remove_dir_all(&tmp);
}
