use stride_core::models::{OutcomeMeasure, ScoringKind};

/// Balance domain: item-scored balance batteries and the ABC confidence
/// scale.
pub(crate) fn measures() -> Vec<OutcomeMeasure> {
    vec![
        OutcomeMeasure {
            id: "bbs".to_string(),
            domain_id: "balance".to_string(),
            name: "Berg Balance Scale".to_string(),
            abbreviation: "BBS".to_string(),
            unit: None,
            scoring: ScoringKind::ItemSum {
                total_items: 14,
                max_item_score: 4,
            },
        },
        OutcomeMeasure {
            id: "abc".to_string(),
            domain_id: "balance".to_string(),
            name: "Activities-specific Balance Confidence Scale".to_string(),
            abbreviation: "ABC".to_string(),
            unit: Some("%".to_string()),
            scoring: ScoringKind::ItemAveragePercent { total_items: 16 },
        },
        OutcomeMeasure {
            id: "fga".to_string(),
            domain_id: "balance".to_string(),
            name: "Functional Gait Assessment".to_string(),
            abbreviation: "FGA".to_string(),
            unit: None,
            scoring: ScoringKind::ItemSum {
                total_items: 10,
                max_item_score: 3,
            },
        },
    ]
}
