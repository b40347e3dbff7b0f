use stride_core::models::{OutcomeMeasure, ScoringKind};

/// Gait & Mobility domain: walking-speed and walking-distance tests plus
/// the Dynamic Gait Index.
pub(crate) fn measures() -> Vec<OutcomeMeasure> {
    vec![
        OutcomeMeasure {
            id: "ten_meter_walk".to_string(),
            domain_id: "gait".to_string(),
            name: "10-Meter Walk Test".to_string(),
            abbreviation: "10MWT".to_string(),
            unit: Some("m/s".to_string()),
            // 10 m course with a 6 m timed zone (2 m acceleration and
            // deceleration at each end).
            scoring: ScoringKind::TimeTrialSpeed {
                reference_distance_m: 6.0,
            },
        },
        OutcomeMeasure {
            id: "six_minute_walk".to_string(),
            domain_id: "gait".to_string(),
            name: "Six Minute Walk Test".to_string(),
            abbreviation: "6MWT".to_string(),
            unit: Some("m".to_string()),
            scoring: ScoringKind::DistanceWalk {
                nominal_minutes: 6.0,
            },
        },
        OutcomeMeasure {
            id: "dgi".to_string(),
            domain_id: "gait".to_string(),
            name: "Dynamic Gait Index".to_string(),
            abbreviation: "DGI".to_string(),
            unit: None,
            scoring: ScoringKind::ItemSum {
                total_items: 8,
                max_item_score: 3,
            },
        },
    ]
}
