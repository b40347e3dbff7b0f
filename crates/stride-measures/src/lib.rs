//! stride-measures
//!
//! The outcome-measure core: static measure catalog and domain lookup,
//! entry drafting and validation, the scoring engine, and entry
//! reconciliation for edit-reload. Pure logic — no network dependency.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod flow;
pub mod recent;
pub mod reconcile;
pub mod score;
pub mod validate;

pub use catalog::{get_measure, list_domains, list_measures};
pub use draft::EntryDraft;
pub use error::MeasureError;
pub use reconcile::{Reconciled, ResultMismatch, reconcile};
pub use score::calculate;
pub use validate::{ValidatedInput, ValidationError, validate};
