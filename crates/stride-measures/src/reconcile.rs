//! Entry reconciliation.
//!
//! Restores the exact draft state a persisted entry was saved with, so an
//! edit reopens in the same entry mode with the same raw values, then
//! recomputes the result to confirm it matches what was stored. A mismatch
//! is surfaced to the caller — the stored value is never silently replaced
//! and the recomputed one is never silently written back.

use serde::{Deserialize, Serialize};
use stride_core::models::{AssistanceLevel, EntryMethod, OutcomeEntry, OutcomeMeasure, ScoringKind};
use stride_core::raw_keys;
use thiserror::Error;
use ts_rs::TS;

use crate::draft::EntryDraft;
use crate::score::calculate;
use crate::validate::validate;

/// Stored vs. recomputed `calculated_result` disagreement. Indicates a
/// prior scoring change or data corruption; reported, not auto-corrected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultMismatch {
    pub stored: String,
    pub recomputed: String,
}

/// A successfully reconstructed draft, plus the mismatch flag when the
/// stored result no longer agrees with recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub draft: EntryDraft,
    pub mismatch: Option<ResultMismatch>,
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("entry records measure '{entry}' but was loaded against '{measure}'")]
    MeasureMismatch { entry: String, measure: String },

    #[error("entry is malformed: {0}")]
    Malformed(String),
}

/// Rebuild the entry-form draft for a persisted entry.
pub fn reconcile(
    measure: &OutcomeMeasure,
    entry: &OutcomeEntry,
) -> Result<Reconciled, ReconcileError> {
    if entry.measure_id != measure.id {
        return Err(ReconcileError::MeasureMismatch {
            entry: entry.measure_id.clone(),
            measure: measure.id.clone(),
        });
    }

    let mut draft = EntryDraft::new(measure, entry.appointment_id);
    draft.assistive_device = entry.assistive_device.clone();
    draft.additional_notes = entry.additional_notes.clone();

    match &measure.scoring {
        ScoringKind::ItemSum { total_items, .. }
        | ScoringKind::ItemAveragePercent { total_items } => {
            // Items present → individual mode, repopulated by index.
            // Otherwise total mode, exactly as captured.
            if let Some(items) = &entry.individual_items {
                if items.len() != *total_items as usize {
                    return Err(ReconcileError::Malformed(format!(
                        "expected {total_items} item scores, found {}",
                        items.len()
                    )));
                }
                draft.entry_method = EntryMethod::Individual;
                draft.item_scores = items.iter().copied().map(Some).collect();
            } else {
                draft.entry_method = EntryMethod::Total;
                draft.total_score = Some(require_total(entry)?);
            }
        }
        ScoringKind::TimeTrialSpeed { .. } => {
            let raw = require_raw(entry)?;
            draft.comfortable_trials = trial_slots(raw, raw_keys::COMFORTABLE_TRIALS, true)?;
            draft.fast_trials = trial_slots(raw, raw_keys::FAST_TRIALS, false)?;
            draft.assistance_level = Some(read_assistance(raw)?);
        }
        ScoringKind::DistanceWalk { nominal_minutes } => {
            let raw = require_raw(entry)?;
            let distance = single_value(raw, raw_keys::DISTANCE_M)?;
            let elapsed = single_value(raw, raw_keys::ELAPSED_MINUTES)?;
            draft.distance_m = Some(distance);
            draft.stopped_early = elapsed < *nominal_minutes;
            draft.elapsed_minutes = draft.stopped_early.then_some(elapsed);
            draft.assistance_level = Some(read_assistance(raw)?);
        }
        ScoringKind::DurationInterpreted { .. } => {
            let raw = require_raw(entry)?;
            draft.duration_seconds = Some(single_value(raw, raw_keys::DURATION_SECONDS)?);
        }
    }

    let input = validate(measure, &draft).map_err(|errors| {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        ReconcileError::Malformed(format!("stored entry failed revalidation: {joined}"))
    })?;

    let recomputed = calculate(&input);
    let mismatch = (recomputed != entry.calculated_result).then(|| ResultMismatch {
        stored: entry.calculated_result.clone(),
        recomputed,
    });

    Ok(Reconciled { draft, mismatch })
}

type RawData = std::collections::BTreeMap<String, Vec<f64>>;

fn require_raw(entry: &OutcomeEntry) -> Result<&RawData, ReconcileError> {
    entry
        .raw_data
        .as_ref()
        .ok_or_else(|| ReconcileError::Malformed("raw_data is missing".to_string()))
}

fn require_total(entry: &OutcomeEntry) -> Result<f64, ReconcileError> {
    entry.total_score.ok_or_else(|| {
        ReconcileError::Malformed("neither individual_items nor total_score present".to_string())
    })
}

fn trial_slots(
    raw: &RawData,
    key: &str,
    required: bool,
) -> Result<[Option<f64>; 2], ReconcileError> {
    match raw.get(key) {
        Some(values) if (1..=2).contains(&values.len()) => {
            Ok([Some(values[0]), values.get(1).copied()])
        }
        Some(values) => Err(ReconcileError::Malformed(format!(
            "'{key}' holds {} values, expected 1 or 2",
            values.len()
        ))),
        None if required => Err(ReconcileError::Malformed(format!("'{key}' is missing"))),
        None => Ok([None, None]),
    }
}

fn single_value(raw: &RawData, key: &str) -> Result<f64, ReconcileError> {
    match raw.get(key) {
        Some(values) if values.len() == 1 => Ok(values[0]),
        Some(values) => Err(ReconcileError::Malformed(format!(
            "'{key}' holds {} values, expected exactly 1",
            values.len()
        ))),
        None => Err(ReconcileError::Malformed(format!("'{key}' is missing"))),
    }
}

fn read_assistance(raw: &RawData) -> Result<AssistanceLevel, ReconcileError> {
    let code = single_value(raw, raw_keys::ASSISTANCE_LEVEL)?;
    if code.fract() != 0.0 || !(0.0..=255.0).contains(&code) {
        return Err(ReconcileError::Malformed(format!(
            "assistance code {code} is not an integer 1–7"
        )));
    }
    AssistanceLevel::from_code(code as u8)
        .map_err(|e| ReconcileError::Malformed(e.to_string()))
}
