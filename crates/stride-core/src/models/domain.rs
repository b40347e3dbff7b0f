use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A clinical category grouping related outcome measures (e.g., "Balance").
/// Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeDomain {
    pub id: String,
    pub name: String,
}
