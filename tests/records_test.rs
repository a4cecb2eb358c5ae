mod helpers;

use rapport::records::{load_connections, parse_connections, RecordError};
use rapport::schedule::{classify, HealthStatus};
use std::io::Write;

#[test]
fn parses_backend_export() {
    let json = r#"[
        {"id": "c-1", "name": "Ana", "lastContact": "2026-03-01T10:00:00", "frequency": 30,
         "company": "Acme", "role": "CTO", "tags": ["work"]},
        {"id": 7, "name": "Ben", "lastContact": null, "frequency": "45"},
        {"id": "c-3", "name": "Cleo", "frequency": "monthly"}
    ]"#;
    let connections = parse_connections(json).unwrap();
    assert_eq!(connections.len(), 3);
    assert_eq!(connections[0].frequency_days, Some(30));
    assert_eq!(connections[0].affiliation().as_deref(), Some("CTO at Acme"));
    assert!(connections[0].last_contact_at.is_some());
    assert_eq!(connections[1].id, "7");
    assert_eq!(connections[1].frequency_days, Some(45));
    assert_eq!(connections[1].last_contact_at, None);
    assert_eq!(connections[2].frequency_days, None);
    assert_eq!(connections[2].effective_frequency(), 90);
}

#[test]
fn accepts_spelled_out_field_names_and_wrapper() {
    let json = r#"{"connections": [
        {"id": "x", "name": "Xan", "lastContactAt": "2026-06-01T09:30:00Z", "frequencyDays": 14}
    ]}"#;
    let connections = parse_connections(json).unwrap();
    assert_eq!(connections[0].frequency_days, Some(14));
    let result = classify(&connections[0], helpers::now());
    assert_eq!(result.days_since_contact, 14);
    assert_eq!(result.status(), HealthStatus::DueSoon);
}

#[test]
fn empty_timestamp_means_never_contacted() {
    let connections = parse_connections(r#"[{"id": "e", "name": "E", "lastContact": ""}]"#).unwrap();
    assert_eq!(connections[0].last_contact_at, None);
}

#[test]
fn bad_timestamp_fails_at_the_boundary() {
    let err = parse_connections(r#"[{"id": "b", "name": "B", "lastContact": "yesterday"}]"#)
        .unwrap_err();
    match err {
        RecordError::InvalidTimestamp { id, value } => {
            assert_eq!(id, "b");
            assert_eq!(value, "yesterday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_wrong_shapes() {
    assert!(matches!(parse_connections("{}"), Err(RecordError::Shape)));
    assert!(matches!(parse_connections("42"), Err(RecordError::Shape)));
    assert!(matches!(parse_connections("[oops"), Err(RecordError::Json(_))));
    assert!(matches!(
        parse_connections(r#"[{"name": "No Id"}]"#),
        Err(RecordError::Malformed { index: 0, .. })
    ));
    assert!(matches!(
        parse_connections(r#"[{"id": "ok", "name": "A"}, {"id": true, "name": "B"}]"#),
        Err(RecordError::InvalidId { index: 1 })
    ));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": "f", "name": "File", "frequency": 30}}]"#).unwrap();
    let connections = load_connections(file.path()).unwrap();
    assert_eq!(connections[0].name, "File");

    let missing = file.path().with_extension("missing");
    assert!(matches!(load_connections(&missing), Err(RecordError::Io { .. })));
}
