use stride_core::models::{InterpretationBand, OutcomeMeasure, ScoringKind};

fn band(max_seconds: Option<f64>, label: &str) -> InterpretationBand {
    InterpretationBand {
        max_seconds,
        label: label.to_string(),
    }
}

/// Function domain: timed transfer and mobility tasks with banded
/// interpretations.
pub(crate) fn measures() -> Vec<OutcomeMeasure> {
    vec![
        OutcomeMeasure {
            id: "five_times_sit_to_stand".to_string(),
            domain_id: "function".to_string(),
            name: "Five Times Sit-to-Stand Test".to_string(),
            abbreviation: "FTSTS".to_string(),
            unit: Some("s".to_string()),
            scoring: ScoringKind::DurationInterpreted {
                bands: vec![
                    band(Some(11.0), "Normal function"),
                    band(Some(13.6), "Mostly normal function"),
                    band(None, "Below normal function"),
                ],
            },
        },
        OutcomeMeasure {
            id: "timed_up_and_go".to_string(),
            domain_id: "function".to_string(),
            name: "Timed Up and Go".to_string(),
            abbreviation: "TUG".to_string(),
            unit: Some("s".to_string()),
            scoring: ScoringKind::DurationInterpreted {
                bands: vec![
                    band(Some(10.0), "Normal mobility"),
                    band(Some(13.5), "Mostly normal mobility"),
                    band(None, "Impaired mobility, increased fall risk"),
                ],
            },
        },
    ]
}
