use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a measure is scored. Each variant carries exactly the parameters
/// that are meaningful for that shape, so a measure definition cannot be
/// half-configured at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringKind {
    /// Integer item scores summed to a total out of
    /// `total_items × max_item_score` (e.g., Berg Balance Scale, /56).
    ItemSum { total_items: u32, max_item_score: u32 },

    /// Per-item 0–100 ratings averaged to a percentage (e.g., ABC scale).
    ItemAveragePercent { total_items: u32 },

    /// Timed walking trials over a fixed reference distance, reported as
    /// gait speed per condition (comfortable, optionally fast).
    TimeTrialSpeed { reference_distance_m: f64 },

    /// Distance covered in a fixed-duration walk; the elapsed time may be
    /// shorter than nominal when the test is stopped early.
    DistanceWalk { nominal_minutes: f64 },

    /// A single task duration mapped onto interpretation bands.
    DurationInterpreted { bands: Vec<InterpretationBand> },
}

/// One interpretation band for a duration-scored measure. `max_seconds` is
/// the inclusive upper bound; `None` marks the open-ended final band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationBand {
    pub max_seconds: Option<f64>,
    pub label: String,
}

impl ScoringKind {
    /// The maximum aggregate score, for the kinds that have one.
    pub fn max_score(&self) -> Option<f64> {
        match self {
            ScoringKind::ItemSum {
                total_items,
                max_item_score,
            } => Some(f64::from(total_items * max_item_score)),
            ScoringKind::ItemAveragePercent { .. } => Some(100.0),
            _ => None,
        }
    }

    /// Number of individually-scored items, for the item-scored kinds.
    pub fn total_items(&self) -> Option<u32> {
        match self {
            ScoringKind::ItemSum { total_items, .. }
            | ScoringKind::ItemAveragePercent { total_items } => Some(*total_items),
            _ => None,
        }
    }
}

/// A standardized clinical test with a defined scoring structure.
/// Immutable reference data, loaded once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeMeasure {
    pub id: String,
    pub domain_id: String,
    pub name: String,
    pub abbreviation: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub unit: Option<String>,
    pub scoring: ScoringKind,
}
