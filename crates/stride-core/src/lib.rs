//! stride-core
//!
//! Pure domain types and raw-data key conventions for outcome-measure
//! recording. No network dependency — this is the shared vocabulary of the
//! Stride system.

pub mod error;
pub mod models;
pub mod raw_keys;
