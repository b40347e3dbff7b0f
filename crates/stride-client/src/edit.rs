//! Edit-load: fetch a persisted entry and reconstruct its draft state.

use reqwest::Client;
use stride_core::models::OutcomeMeasure;
use stride_measures::reconcile::{ReconcileError, Reconciled, reconcile};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::entries;
use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// Fetch an entry and reconcile it against its measure. A result mismatch
/// is logged and returned in [`Reconciled::mismatch`]; the edit proceeds
/// with the stored value intact.
pub async fn load_entry_for_edit(
    client: &Client,
    config: &ApiConfig,
    measure: &OutcomeMeasure,
    entry_id: Uuid,
) -> Result<Reconciled, EditError> {
    let entry = entries::get_entry(client, config, entry_id).await?;
    let reconciled = reconcile(measure, &entry)?;

    if let Some(mismatch) = &reconciled.mismatch {
        warn!(
            entry_id = %entry_id,
            stored = %mismatch.stored,
            recomputed = %mismatch.recomputed,
            "stored calculated_result disagrees with recomputation"
        );
    }

    Ok(reconciled)
}
