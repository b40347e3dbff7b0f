//! Raw-data key conventions.
//!
//! Names of the arrays stored in `OutcomeEntry::raw_data` for the measure
//! kinds that capture something other than item scores. These keys define
//! the canonical layout of raw capture, so an entry saved today re-hydrates
//! into the same trial/distance/duration fields on edit.

/// Comfortable-speed trial times in seconds, one or two values.
pub const COMFORTABLE_TRIALS: &str = "comfortable_trials";

/// Fast-speed trial times in seconds, one or two values. Absent when the
/// fast condition was not administered.
pub const FAST_TRIALS: &str = "fast_trials";

/// Walked distance in meters, single value.
pub const DISTANCE_M: &str = "distance_m";

/// Elapsed walk time in minutes, single value. Equals the nominal test
/// duration unless the test was stopped early.
pub const ELAPSED_MINUTES: &str = "elapsed_minutes";

/// Total task duration in seconds, single value.
pub const DURATION_SECONDS: &str = "duration_seconds";

/// Assistance-level ordinal code (1–7), single value.
pub const ASSISTANCE_LEVEL: &str = "assistance_level";
