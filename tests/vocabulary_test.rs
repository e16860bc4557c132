use rate_extract::*;

const CUSTOM: &str = r#"{
    "fields": {
        "service": ["Service"],
        "entry": ["In"],
        "rate": ["Price", "Rate"]
    },
    "services": [
        { "name": "Sea freight", "keywords": ["sea", "ocean"] },
        { "name": "Rail", "keywords": ["rail"] }
    ]
}"#;

#[test]
fn test_builtin_vocabulary() {
    let vocabulary = Vocabulary::builtin();

    assert_eq!(vocabulary.fields.field_for("Услуга"), Some(Field::Service));
    assert_eq!(vocabulary.fields.field_for("ВХОД"), Some(Field::Entry));
    assert_eq!(vocabulary.fields.field_for(" ставка "), Some(Field::Rate));
    assert_eq!(vocabulary.fields.field_for("Цена"), None);
    assert_eq!(vocabulary.services.keywords().count(), 11);
}

#[test]
fn test_builtin_keyword_order() {
    let first = Vocabulary::builtin().services.keywords().next();

    assert_eq!(first, Some(("фрахт", "Фрахт")));
}

#[test]
fn test_default_config_round_trips_through_json() {
    let config = VocabularyConfig::default();
    let json = serde_json::to_string(&config).unwrap();

    assert!(Vocabulary::from_json(&json).is_ok());
}

#[test]
fn test_custom_vocabulary() {
    let vocabulary = Vocabulary::from_json(CUSTOM).unwrap();

    assert_eq!(vocabulary.fields.field_for("price"), Some(Field::Rate));
    assert_eq!(vocabulary.services.canonicalize("Ocean leg"), Some("Sea freight"));
    assert_eq!(vocabulary.services.canonicalize("Фрахт"), None);
}

#[test]
fn test_match_headers_bijection() {
    let fields = &Vocabulary::builtin().fields;

    let columns = fields.match_headers(&["Ставка", "Услуга", "Вход"]).unwrap();
    assert_eq!(columns.column(Field::Service), 1);
    assert_eq!(columns.column(Field::Entry), 2);
    assert_eq!(columns.column(Field::Rate), 0);

    assert!(fields.match_headers(&["Ставка", "Rate", "Вход"]).is_none());
    assert!(fields.match_headers(&["Ставка", "Услуга"]).is_none());
}

#[test]
fn test_alias_conflict_rejected() {
    let mut config = VocabularyConfig::default();
    config.fields.entry.push(" СТАВКА ".into());

    let result = Vocabulary::from_config(&config);

    assert!(matches!(
        result,
        Err(ExtractError::AliasConflict {
            first: Field::Rate,
            second: Field::Entry,
            ..
        }) | Err(ExtractError::AliasConflict {
            first: Field::Entry,
            second: Field::Rate,
            ..
        })
    ));
}

#[test]
fn test_keyword_conflict_rejected() {
    let mut config = VocabularyConfig::default();
    config.services[0].keywords.push("ржд".into());

    let result = Vocabulary::from_config(&config);

    assert!(matches!(result, Err(ExtractError::KeywordConflict { .. })));
}

#[test]
fn test_repeated_alias_within_field_allowed() {
    let mut config = VocabularyConfig::default();
    config.fields.rate.push("ставка".into());

    assert!(Vocabulary::from_config(&config).is_ok());
}

#[test]
fn test_empty_aliases_rejected() {
    let mut config = VocabularyConfig::default();
    config.fields.entry.clear();

    let result = Vocabulary::from_config(&config);

    assert!(matches!(result, Err(ExtractError::EmptyAliases(Field::Entry))));
}

#[test]
fn test_empty_keywords_rejected() {
    let mut config = VocabularyConfig::default();
    config.services[1].keywords = vec!["  ".into()];

    let result = Vocabulary::from_config(&config);

    assert!(matches!(result, Err(ExtractError::EmptyKeywords(_))));
}

#[test]
fn test_malformed_json() {
    let result = Vocabulary::from_json("{ not json");

    assert!(matches!(result, Err(ExtractError::Config(_))));
}

#[test]
fn test_missing_file() {
    let result = Vocabulary::from_path("/nonexistent/vocabulary.json");

    assert!(matches!(result, Err(ExtractError::Config(_))));
}

#[test]
fn test_field_display() {
    assert_eq!(Field::Service.to_string(), "service");
    assert_eq!(Field::ALL.map(Field::as_str), ["service", "entry", "rate"]);
}

#[test]
fn test_normalize_label() {
    assert_eq!(normalize_label("  Ставка \n за  контейнер "), "ставка за контейнер");
}
