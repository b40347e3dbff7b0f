//! stride-client
//!
//! Async REST client for the persistence collaborator: catalog fetch,
//! entry CRUD, per-note listing, and edit-load (fetch + reconcile).
//! Thin wrapper around reqwest; all domain logic lives in stride-measures.

pub mod catalog;
pub mod config;
pub mod edit;
pub mod entries;
pub mod error;

pub use config::ApiConfig;
pub use error::ApiError;
