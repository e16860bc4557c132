use rate_extract::*;

// --- parse_sender ---

#[test]
fn test_parse_sender_name_and_address() {
    let (name, address) = parse_sender("Ivan Petrov <ivan@example.com>");

    assert_eq!(name.as_deref(), Some("Ivan Petrov"));
    assert_eq!(address.as_deref(), Some("ivan@example.com"));
}

#[test]
fn test_parse_sender_quoted_name() {
    let (name, address) = parse_sender("\"Petrov, Ivan\" <ivan@example.com>");

    assert_eq!(name.as_deref(), Some("Petrov, Ivan"));
    assert_eq!(address.as_deref(), Some("ivan@example.com"));
}

#[test]
fn test_parse_sender_bare_address() {
    assert_eq!(
        parse_sender("  ivan@example.com "),
        (None, Some("ivan@example.com".to_string()))
    );
}

#[test]
fn test_parse_sender_angle_only() {
    assert_eq!(
        parse_sender("<ivan@example.com>"),
        (None, Some("ivan@example.com".to_string()))
    );
}

#[test]
fn test_parse_sender_name_only() {
    assert_eq!(
        parse_sender("Unknown sender"),
        (Some("Unknown sender".to_string()), None)
    );
}

#[test]
fn test_parse_sender_empty() {
    assert_eq!(parse_sender(""), (None, None));
}

// --- EmailData ---

#[test]
fn test_email_data_derives_sender() {
    let email = EmailData::new("Rates", Some("Ivan <ivan@example.com>".into()));

    assert_eq!(email.sender_name.as_deref(), Some("Ivan"));
    assert_eq!(email.sender_address.as_deref(), Some("ivan@example.com"));
}

#[test]
fn test_email_data_without_sender() {
    let email = EmailData::new("Rates", None);

    assert!(email.sender_name.is_none());
    assert!(email.sender_address.is_none());
}

#[test]
fn test_email_without_html_has_no_tables() {
    let mut email = EmailData::new("Rates", None);
    email.text = Some("Фрахт 100 40000".into());

    assert!(email.try_rate_tables(Vocabulary::builtin()).unwrap().is_empty());
    assert!(email.rate_tables(Vocabulary::builtin()).is_empty());
}

#[test]
fn test_email_with_html_tables() {
    let email = EmailData::new("Rates", None).with_html(
        "<table><tr><td>Услуга</td><td>Вход</td><td>Ставка</td></tr>\
         <tr><td>Фрахт</td><td>100</td><td>40000</td></tr></table>",
    );

    assert_eq!(email.rate_tables(Vocabulary::builtin()).record_count(), 1);
}

// --- CanonicalRateRecord ---

#[test]
fn test_record_display() {
    let record = CanonicalRateRecord {
        service: "Фрахт".into(),
        entry: Some(100.0),
        rate: 40000.0,
    };
    assert_eq!(record.to_string(), "Фрахт: entry 100, rate 40000");

    let record = CanonicalRateRecord {
        entry: None,
        ..record
    };
    assert_eq!(record.to_string(), "Фрахт: rate 40000");
}

#[test]
fn test_record_serializes_null_entry() {
    let record = CanonicalRateRecord {
        service: "Фрахт".into(),
        entry: None,
        rate: 1.5,
    };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"service":"Фрахт","entry":null,"rate":1.5}"#);
}
