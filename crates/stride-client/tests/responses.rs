use stride_client::error::parse_validation_errors;
use stride_core::models::{EntryMethod, OutcomeEntry, OutcomeMeasure, ScoringKind};
use uuid::Uuid;

#[test]
fn create_request_omits_server_assigned_fields() {
    let entry = OutcomeEntry {
        id: None,
        appointment_id: Uuid::new_v4(),
        measure_id: "bbs".to_string(),
        entry_method: EntryMethod::Total,
        individual_items: None,
        total_score: Some(42.0),
        raw_data: None,
        assistive_device: None,
        additional_notes: None,
        calculated_result: "42/56".to_string(),
        timestamp: None,
    };

    let json = serde_json::to_value(&entry).unwrap();
    let obj = json.as_object().unwrap();
    assert!(!obj.contains_key("id"));
    assert!(!obj.contains_key("timestamp"));
    assert!(!obj.contains_key("individual_items"));
    assert_eq!(json["entry_method"], "total");
    assert_eq!(json["total_score"], 42.0);
}

#[test]
fn persisted_entry_deserializes_with_raw_data() {
    let body = r#"{
        "id": "7f4df5f0-9d52-4b43-8f0a-3a9f4f9f7f11",
        "appointment_id": "2a9dd0a2-46f5-4b8e-9c8e-29a25c1ce0b4",
        "measure_id": "ten_meter_walk",
        "entry_method": "total",
        "raw_data": {
            "comfortable_trials": [6.0, 6.0],
            "assistance_level": [7.0]
        },
        "calculated_result": "6.0s → 1.00 m/s",
        "timestamp": "2026-03-14T10:30:00Z"
    }"#;

    let entry: OutcomeEntry = serde_json::from_str(body).unwrap();
    assert!(entry.id.is_some());
    assert!(entry.timestamp.is_some());
    let raw = entry.raw_data.unwrap();
    assert_eq!(raw["comfortable_trials"], vec![6.0, 6.0]);
    assert_eq!(raw["assistance_level"], vec![7.0]);
}

#[test]
fn measure_scoring_kind_is_internally_tagged() {
    let body = r#"{
        "id": "bbs",
        "domain_id": "balance",
        "name": "Berg Balance Scale",
        "abbreviation": "BBS",
        "scoring": {
            "kind": "item_sum",
            "total_items": 14,
            "max_item_score": 4
        }
    }"#;

    let measure: OutcomeMeasure = serde_json::from_str(body).unwrap();
    match measure.scoring {
        ScoringKind::ItemSum {
            total_items,
            max_item_score,
        } => {
            assert_eq!(total_items, 14);
            assert_eq!(max_item_score, 4);
        }
        other => panic!("unexpected scoring kind: {other:?}"),
    }
    assert_eq!(measure.scoring.max_score(), Some(56.0));
}

#[test]
fn server_validation_errors_are_extracted_verbatim() {
    let body = r#"{"detail": {"validation_errors": [
        "Measure has been deactivated",
        "Appointment is locked"
    ]}}"#;

    let errors = parse_validation_errors(body).unwrap();
    assert_eq!(
        errors,
        vec![
            "Measure has been deactivated".to_string(),
            "Appointment is locked".to_string()
        ]
    );
}

#[test]
fn other_error_bodies_are_not_validation_failures() {
    assert!(parse_validation_errors("").is_none());
    assert!(parse_validation_errors("internal server error").is_none());
    assert!(parse_validation_errors(r#"{"detail": "boom"}"#).is_none());
    assert!(parse_validation_errors(r#"{"detail": {"validation_errors": []}}"#).is_none());
}
