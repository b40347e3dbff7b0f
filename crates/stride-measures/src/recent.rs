//! Recently-used measures.
//!
//! A small client-local MRU list: bounded to 5, most-recent-first,
//! de-duplicated by measure id. Advisory only — it never affects scoring
//! and is not part of the persisted data model.

use serde::{Deserialize, Serialize};
use stride_core::models::OutcomeMeasure;
use ts_rs::TS;

const CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentMeasure {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentMeasures {
    items: Vec<RecentMeasure>,
}

impl RecentMeasures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a use of `measure`, moving it to the front.
    pub fn record(&mut self, measure: &OutcomeMeasure) {
        self.items.retain(|m| m.id != measure.id);
        self.items.insert(
            0,
            RecentMeasure {
                id: measure.id.clone(),
                name: measure.name.clone(),
                abbreviation: measure.abbreviation.clone(),
            },
        );
        self.items.truncate(CAPACITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecentMeasure> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
