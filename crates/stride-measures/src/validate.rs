//! Entry validation.
//!
//! Checks a draft against its measure's rules and produces a
//! [`ValidatedInput`] for the scoring engine. Validation never mutates the
//! draft and returns the complete error list for the attempt; the one
//! exception is the missing-item scan, which reports the earliest gap only.

use serde::{Deserialize, Serialize};
use stride_core::models::{
    AssistanceLevel, EntryMethod, InterpretationBand, OutcomeMeasure, ScoringKind,
};
use thiserror::Error;
use ts_rs::TS;

use crate::draft::EntryDraft;

/// A single field/item failure, shown to the clinician verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[error("{message}")]
#[ts(export)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// How an item-scored measure was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreCapture {
    Individual(Vec<f64>),
    Total(f64),
}

/// One or two timed trials under the same condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrialPair {
    pub first: f64,
    pub second: Option<f64>,
}

impl TrialPair {
    pub fn mean(&self) -> f64 {
        match self.second {
            Some(second) => (self.first + second) / 2.0,
            None => self.first,
        }
    }
}

/// Validated raw input plus the scoring parameters the engine needs.
/// Consumed only by [`crate::score::calculate`]; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidatedInput {
    ItemSum {
        capture: ScoreCapture,
        max_score: u32,
    },
    ItemAveragePercent {
        capture: ScoreCapture,
    },
    TimeTrialSpeed {
        comfortable: TrialPair,
        fast: Option<TrialPair>,
        reference_distance_m: f64,
        assistance: AssistanceLevel,
    },
    DistanceWalk {
        distance_m: f64,
        elapsed_minutes: f64,
        assistance: AssistanceLevel,
    },
    DurationInterpreted {
        seconds: f64,
        bands: Vec<InterpretationBand>,
    },
}

/// Validate a draft against its measure. On failure returns every error
/// found in this attempt.
pub fn validate(
    measure: &OutcomeMeasure,
    draft: &EntryDraft,
) -> Result<ValidatedInput, Vec<ValidationError>> {
    match &measure.scoring {
        ScoringKind::ItemSum {
            total_items,
            max_item_score,
        } => {
            let max_score = total_items * max_item_score;
            let capture = validate_items(
                draft,
                *total_items,
                f64::from(*max_item_score),
                f64::from(max_score),
                true,
            )?;
            Ok(ValidatedInput::ItemSum { capture, max_score })
        }
        ScoringKind::ItemAveragePercent { total_items } => {
            let capture = validate_items(draft, *total_items, 100.0, 100.0, false)?;
            Ok(ValidatedInput::ItemAveragePercent { capture })
        }
        ScoringKind::TimeTrialSpeed {
            reference_distance_m,
        } => validate_time_trial(draft, *reference_distance_m),
        ScoringKind::DistanceWalk { nominal_minutes } => {
            validate_distance_walk(draft, *nominal_minutes)
        }
        ScoringKind::DurationInterpreted { bands } => {
            let mut errors = Vec::new();
            let seconds = match draft.duration_seconds {
                Some(s) if s > 0.0 => Some(s),
                Some(s) => {
                    errors.push(ValidationError::new(
                        "duration_seconds",
                        format!("Duration {s} must be greater than 0 seconds"),
                    ));
                    None
                }
                None => {
                    errors.push(ValidationError::new(
                        "duration_seconds",
                        "A duration in seconds is required",
                    ));
                    None
                }
            };
            match seconds {
                Some(seconds) if errors.is_empty() => Ok(ValidatedInput::DurationInterpreted {
                    seconds,
                    bands: bands.clone(),
                }),
                _ => Err(errors),
            }
        }
    }
}

/// Shared item-scored path. `integer_items` enforces whole-number scores
/// (item_sum); percent measures accept any real value in range.
fn validate_items(
    draft: &EntryDraft,
    total_items: u32,
    max_item: f64,
    max_total: f64,
    integer_items: bool,
) -> Result<ScoreCapture, Vec<ValidationError>> {
    let mut errors = Vec::new();

    match draft.entry_method {
        EntryMethod::Individual => {
            let mut values = Vec::with_capacity(total_items as usize);
            let mut missing_reported = false;
            for index in 0..total_items as usize {
                let item_number = index + 1;
                match draft.item_scores.get(index).copied().flatten() {
                    Some(value) => {
                        if integer_items && value.fract() != 0.0 {
                            errors.push(ValidationError::new(
                                format!("item_{item_number}"),
                                format!("Item {item_number} score must be a whole number"),
                            ));
                        } else if !(0.0..=max_item).contains(&value) {
                            errors.push(ValidationError::new(
                                format!("item_{item_number}"),
                                format!(
                                    "Item {item_number} score {value} is outside range [0, {max_item}]"
                                ),
                            ));
                        } else {
                            values.push(value);
                        }
                    }
                    None if !missing_reported => {
                        // Earliest gap, 1-indexed. Present items are still
                        // range-checked so the attempt's errors are complete.
                        errors.push(ValidationError::new(
                            format!("item_{item_number}"),
                            format!("Item {item_number} has no score"),
                        ));
                        missing_reported = true;
                    }
                    None => {}
                }
            }
            if errors.is_empty() {
                Ok(ScoreCapture::Individual(values))
            } else {
                Err(errors)
            }
        }
        EntryMethod::Total => match draft.total_score {
            Some(value) => {
                if integer_items && value.fract() != 0.0 {
                    errors.push(ValidationError::new(
                        "total_score",
                        format!("Total score {value} must be a whole number"),
                    ));
                }
                if !(0.0..=max_total).contains(&value) {
                    errors.push(ValidationError::new(
                        "total_score",
                        format!("Total score {value} is outside range [0, {max_total}]"),
                    ));
                }
                if errors.is_empty() {
                    Ok(ScoreCapture::Total(value))
                } else {
                    Err(errors)
                }
            }
            None => Err(vec![ValidationError::new(
                "total_score",
                "A total score is required",
            )]),
        },
    }
}

fn validate_time_trial(
    draft: &EntryDraft,
    reference_distance_m: f64,
) -> Result<ValidatedInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let comfortable = match draft.comfortable_trials[0] {
        Some(first) => {
            check_trial(&mut errors, "comfortable_trial_1", "Comfortable trial 1", first);
            let second = draft.comfortable_trials[1];
            if let Some(s) = second {
                check_trial(&mut errors, "comfortable_trial_2", "Comfortable trial 2", s);
            }
            Some(TrialPair { first, second })
        }
        None => {
            errors.push(ValidationError::new(
                "comfortable_trial_1",
                "At least one comfortable-speed trial time is required",
            ));
            None
        }
    };

    let fast = match draft.fast_trials {
        [Some(first), second] => {
            check_trial(&mut errors, "fast_trial_1", "Fast trial 1", first);
            if let Some(s) = second {
                check_trial(&mut errors, "fast_trial_2", "Fast trial 2", s);
            }
            Some(TrialPair { first, second })
        }
        [None, Some(_)] => {
            errors.push(ValidationError::new(
                "fast_trial_1",
                "Fast trial 1 is required when fast trial 2 is recorded",
            ));
            None
        }
        [None, None] => None,
    };

    let assistance = require_assistance(&mut errors, draft);

    match (comfortable, assistance) {
        (Some(comfortable), Some(assistance)) if errors.is_empty() => {
            Ok(ValidatedInput::TimeTrialSpeed {
                comfortable,
                fast,
                reference_distance_m,
                assistance,
            })
        }
        _ => Err(errors),
    }
}

fn validate_distance_walk(
    draft: &EntryDraft,
    nominal_minutes: f64,
) -> Result<ValidatedInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let distance_m = match draft.distance_m {
        Some(d) if d >= 0.0 => Some(d),
        Some(d) => {
            errors.push(ValidationError::new(
                "distance_m",
                format!("Distance {d} must be 0 or greater"),
            ));
            None
        }
        None => {
            errors.push(ValidationError::new("distance_m", "A distance is required"));
            None
        }
    };

    // Stopping early requires an explicit elapsed-time override; otherwise
    // the nominal full duration applies.
    let elapsed_minutes = if draft.stopped_early {
        match draft.elapsed_minutes {
            Some(t) if t > 0.0 && t <= nominal_minutes => Some(t),
            Some(t) => {
                errors.push(ValidationError::new(
                    "elapsed_minutes",
                    format!(
                        "Elapsed time {t} must be greater than 0 and at most {nominal_minutes} minutes"
                    ),
                ));
                None
            }
            None => {
                errors.push(ValidationError::new(
                    "elapsed_minutes",
                    "An elapsed time is required when the test was stopped early",
                ));
                None
            }
        }
    } else {
        Some(nominal_minutes)
    };

    let assistance = require_assistance(&mut errors, draft);

    match (distance_m, elapsed_minutes, assistance) {
        (Some(distance_m), Some(elapsed_minutes), Some(assistance)) if errors.is_empty() => {
            Ok(ValidatedInput::DistanceWalk {
                distance_m,
                elapsed_minutes,
                assistance,
            })
        }
        _ => Err(errors),
    }
}

fn check_trial(errors: &mut Vec<ValidationError>, field: &str, label: &str, seconds: f64) {
    if seconds <= 0.0 {
        errors.push(ValidationError::new(
            field,
            format!("{label} time {seconds} must be greater than 0 seconds"),
        ));
    }
}

fn require_assistance(
    errors: &mut Vec<ValidationError>,
    draft: &EntryDraft,
) -> Option<AssistanceLevel> {
    if draft.assistance_level.is_none() {
        errors.push(ValidationError::new(
            "assistance_level",
            "An assistance level is required",
        ));
    }
    draft.assistance_level
}
