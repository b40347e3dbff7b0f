//! Scoring engine.
//!
//! Pure, deterministic functions from validated input to the displayed
//! `calculated_result` string. Percentages, speeds and seconds render with
//! fixed precision; integer item sums are never rounded.

use crate::validate::{ScoreCapture, TrialPair, ValidatedInput};

/// Derive the canonical `calculated_result` for a validated input.
pub fn calculate(input: &ValidatedInput) -> String {
    match input {
        ValidatedInput::ItemSum { capture, max_score } => {
            let score = match capture {
                ScoreCapture::Individual(items) => items.iter().sum::<f64>(),
                ScoreCapture::Total(total) => *total,
            };
            format!("{}/{max_score}", score as i64)
        }
        ValidatedInput::ItemAveragePercent { capture } => {
            let value = match capture {
                ScoreCapture::Individual(items) if !items.is_empty() => {
                    items.iter().sum::<f64>() / items.len() as f64
                }
                ScoreCapture::Individual(_) => 0.0,
                ScoreCapture::Total(total) => *total,
            };
            format!("{value:.1}%")
        }
        ValidatedInput::TimeTrialSpeed {
            comfortable,
            fast,
            reference_distance_m,
            ..
        } => {
            let comfortable = speed_condition(comfortable, *reference_distance_m);
            match fast {
                // A condition with no trials is omitted entirely, never
                // rendered as zero.
                None => comfortable,
                Some(fast) => {
                    let fast = speed_condition(fast, *reference_distance_m);
                    format!("Comfortable: {comfortable} | Fast: {fast}")
                }
            }
        }
        ValidatedInput::DistanceWalk {
            distance_m,
            elapsed_minutes,
            ..
        } => {
            format!(
                "{} m in {elapsed_minutes:.1} min",
                trim_trailing_zero(*distance_m)
            )
        }
        ValidatedInput::DurationInterpreted { seconds, bands } => {
            let interpretation = bands
                .iter()
                .find(|band| band.max_seconds.is_none_or(|max| *seconds <= max))
                .map(|band| band.label.as_str())
                .unwrap_or("Unclassified");
            format!("{seconds:.1}s – {interpretation}")
        }
    }
}

fn speed_condition(pair: &TrialPair, reference_distance_m: f64) -> String {
    let avg = pair.mean();
    let speed = reference_distance_m / avg;
    format!("{avg:.1}s → {speed:.2} m/s")
}

/// Whole-number distances render without a decimal ("300 m"), fractional
/// ones with one place ("302.5 m").
fn trim_trailing_zero(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
