use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Whether raw score was captured item-by-item or as a single aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntryMethod {
    Individual,
    Total,
}

/// One recorded administration of a measure for a specific appointment.
///
/// This is the collaborator's wire shape. `id` and `timestamp` are
/// server-assigned and absent from create requests. `raw_data` preserves
/// measure-specific raw capture (trial times, distance, elapsed minutes,
/// assistance code) with full fidelity so edit-reload recomputes exactly;
/// it is never discarded once derived values exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeEntry {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Uuid>,
    pub appointment_id: Uuid,
    pub measure_id: String,
    pub entry_method: EntryMethod,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub individual_items: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub raw_data: Option<BTreeMap<String, Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub assistive_device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub additional_notes: Option<String>,
    pub calculated_result: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<jiff::Timestamp>,
}
