//! Entry persistence: create, replace, fetch, delete, and per-note listing.
//!
//! Edits are full replacements — there is no partial update. Calls are
//! awaited sequentially; the caller's `ActionGate` keeps a save or delete
//! from being re-submitted while one is in flight.

use reqwest::Client;
use serde::Deserialize;
use stride_core::models::OutcomeEntry;
use tracing::info;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{ApiError, check};

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    entries: Vec<OutcomeEntry>,
}

/// POST a new entry. `id` and `timestamp` are absent from the request
/// (serde skips `None`) and come back server-assigned.
pub async fn create_entry(
    client: &Client,
    config: &ApiConfig,
    entry: &OutcomeEntry,
) -> Result<OutcomeEntry, ApiError> {
    let resp = client
        .post(config.url("/outcome-entries"))
        .json(entry)
        .send()
        .await?;
    let resp = check(resp, "outcome entry").await?;
    let created: OutcomeEntry = resp.json().await?;
    info!(
        entry_id = ?created.id,
        measure_id = %created.measure_id,
        "created outcome entry"
    );
    Ok(created)
}

/// PUT a full replacement of an existing entry.
pub async fn update_entry(
    client: &Client,
    config: &ApiConfig,
    entry: &OutcomeEntry,
) -> Result<OutcomeEntry, ApiError> {
    let id = entry.id.ok_or(ApiError::MissingId)?;
    let resp = client
        .put(config.url(&format!("/outcome-entries/{id}")))
        .json(entry)
        .send()
        .await?;
    let resp = check(resp, &format!("entry '{id}'")).await?;
    let updated: OutcomeEntry = resp.json().await?;
    info!(entry_id = %id, measure_id = %updated.measure_id, "updated outcome entry");
    Ok(updated)
}

pub async fn get_entry(
    client: &Client,
    config: &ApiConfig,
    id: Uuid,
) -> Result<OutcomeEntry, ApiError> {
    let resp = client
        .get(config.url(&format!("/outcome-entries/{id}")))
        .send()
        .await?;
    let resp = check(resp, &format!("entry '{id}'")).await?;
    Ok(resp.json().await?)
}

pub async fn delete_entry(client: &Client, config: &ApiConfig, id: Uuid) -> Result<(), ApiError> {
    let resp = client
        .delete(config.url(&format!("/outcome-entries/{id}")))
        .send()
        .await?;
    check(resp, &format!("entry '{id}'")).await?;
    info!(entry_id = %id, "deleted outcome entry");
    Ok(())
}

/// All entries recorded against one treatment note, for display.
pub async fn list_entries(
    client: &Client,
    config: &ApiConfig,
    appointment_id: Uuid,
) -> Result<Vec<OutcomeEntry>, ApiError> {
    let resp = client
        .get(config.url(&format!("/treatment-notes/{appointment_id}/outcome-entries")))
        .send()
        .await?;
    let resp = check(resp, &format!("treatment note '{appointment_id}'")).await?;
    let body: EntriesResponse = resp.json().await?;
    info!(
        appointment_id = %appointment_id,
        count = body.entries.len(),
        "fetched outcome entries"
    );
    Ok(body.entries)
}
