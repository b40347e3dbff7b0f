//! Static registry of outcome domains and measures.
//!
//! Reference data built once per process. Read-only; lookups fail with
//! [`MeasureError`] for unknown ids and have no side effects.

use std::sync::LazyLock;

use stride_core::models::{OutcomeDomain, OutcomeMeasure};

use crate::error::MeasureError;

mod balance;
mod function;
mod gait;

static DOMAINS: LazyLock<Vec<OutcomeDomain>> = LazyLock::new(|| {
    vec![
        OutcomeDomain {
            id: "balance".to_string(),
            name: "Balance".to_string(),
        },
        OutcomeDomain {
            id: "gait".to_string(),
            name: "Gait & Mobility".to_string(),
        },
        OutcomeDomain {
            id: "function".to_string(),
            name: "Function".to_string(),
        },
    ]
});

static MEASURES: LazyLock<Vec<OutcomeMeasure>> = LazyLock::new(|| {
    let mut measures = balance::measures();
    measures.extend(gait::measures());
    measures.extend(function::measures());
    measures
});

/// All clinical domains, in display order.
pub fn list_domains() -> &'static [OutcomeDomain] {
    &DOMAINS
}

/// The measures belonging to one domain, in display order.
pub fn list_measures(domain_id: &str) -> Result<Vec<&'static OutcomeMeasure>, MeasureError> {
    if !DOMAINS.iter().any(|d| d.id == domain_id) {
        return Err(MeasureError::UnknownDomain(domain_id.to_string()));
    }
    Ok(MEASURES.iter().filter(|m| m.domain_id == domain_id).collect())
}

/// Look up a measure by id.
pub fn get_measure(measure_id: &str) -> Result<&'static OutcomeMeasure, MeasureError> {
    MEASURES
        .iter()
        .find(|m| m.id == measure_id)
        .ok_or_else(|| MeasureError::UnknownMeasure(measure_id.to_string()))
}
