//! The in-progress entry draft.
//!
//! One draft belongs to exactly one entry-form lifecycle; it is passed
//! explicitly, never shared. The draft holds everything the form edits,
//! for every measure kind; validation decides which fields matter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stride_core::models::{AssistanceLevel, EntryMethod, OutcomeEntry, OutcomeMeasure};
use stride_core::raw_keys;
use ts_rs::TS;
use uuid::Uuid;

use crate::score::calculate;
use crate::validate::{ScoreCapture, ValidatedInput, ValidationError, validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntryDraft {
    pub measure_id: String,
    pub appointment_id: Uuid,
    pub entry_method: EntryMethod,
    /// One slot per item for item-scored measures; `None` = not yet scored.
    pub item_scores: Vec<Option<f64>>,
    pub total_score: Option<f64>,
    pub comfortable_trials: [Option<f64>; 2],
    pub fast_trials: [Option<f64>; 2],
    pub distance_m: Option<f64>,
    pub stopped_early: bool,
    pub elapsed_minutes: Option<f64>,
    pub duration_seconds: Option<f64>,
    pub assistance_level: Option<AssistanceLevel>,
    pub assistive_device: Option<String>,
    pub additional_notes: Option<String>,
}

impl EntryDraft {
    /// A blank draft for one measure and appointment. Item-scored measures
    /// start in individual mode with an empty slot per item; other kinds
    /// have no item grid and record as a single aggregate.
    pub fn new(measure: &OutcomeMeasure, appointment_id: Uuid) -> Self {
        let (entry_method, item_scores) = match measure.scoring.total_items() {
            Some(total_items) => (EntryMethod::Individual, vec![None; total_items as usize]),
            None => (EntryMethod::Total, Vec::new()),
        };
        Self {
            measure_id: measure.id.clone(),
            appointment_id,
            entry_method,
            item_scores,
            total_score: None,
            comfortable_trials: [None, None],
            fast_trials: [None, None],
            distance_m: None,
            stopped_early: false,
            elapsed_minutes: None,
            duration_seconds: None,
            assistance_level: None,
            assistive_device: None,
            additional_notes: None,
        }
    }

    /// Validate, score, and assemble a persistable entry. The returned
    /// entry has no id or timestamp; the server assigns both on create.
    pub fn build_entry(
        &self,
        measure: &OutcomeMeasure,
    ) -> Result<OutcomeEntry, Vec<ValidationError>> {
        let input = validate(measure, self)?;
        let calculated_result = calculate(&input);

        let mut entry = OutcomeEntry {
            id: None,
            appointment_id: self.appointment_id,
            measure_id: self.measure_id.clone(),
            entry_method: self.entry_method,
            individual_items: None,
            total_score: None,
            raw_data: None,
            assistive_device: self.assistive_device.clone(),
            additional_notes: self.additional_notes.clone(),
            calculated_result,
            timestamp: None,
        };

        match input {
            ValidatedInput::ItemSum { capture, .. }
            | ValidatedInput::ItemAveragePercent { capture } => match capture {
                ScoreCapture::Individual(items) => entry.individual_items = Some(items),
                ScoreCapture::Total(total) => entry.total_score = Some(total),
            },
            ValidatedInput::TimeTrialSpeed {
                comfortable,
                fast,
                assistance,
                ..
            } => {
                let mut raw = BTreeMap::new();
                raw.insert(raw_keys::COMFORTABLE_TRIALS.to_string(), pair_values(comfortable));
                if let Some(fast) = fast {
                    raw.insert(raw_keys::FAST_TRIALS.to_string(), pair_values(fast));
                }
                raw.insert(
                    raw_keys::ASSISTANCE_LEVEL.to_string(),
                    vec![f64::from(assistance.code())],
                );
                entry.entry_method = EntryMethod::Total;
                entry.raw_data = Some(raw);
            }
            ValidatedInput::DistanceWalk {
                distance_m,
                elapsed_minutes,
                assistance,
            } => {
                let mut raw = BTreeMap::new();
                raw.insert(raw_keys::DISTANCE_M.to_string(), vec![distance_m]);
                raw.insert(raw_keys::ELAPSED_MINUTES.to_string(), vec![elapsed_minutes]);
                raw.insert(
                    raw_keys::ASSISTANCE_LEVEL.to_string(),
                    vec![f64::from(assistance.code())],
                );
                entry.entry_method = EntryMethod::Total;
                entry.raw_data = Some(raw);
            }
            ValidatedInput::DurationInterpreted { seconds, .. } => {
                let mut raw = BTreeMap::new();
                raw.insert(raw_keys::DURATION_SECONDS.to_string(), vec![seconds]);
                entry.entry_method = EntryMethod::Total;
                entry.raw_data = Some(raw);
            }
        }

        Ok(entry)
    }
}

fn pair_values(pair: crate::validate::TrialPair) -> Vec<f64> {
    match pair.second {
        Some(second) => vec![pair.first, second],
        None => vec![pair.first],
    }
}
