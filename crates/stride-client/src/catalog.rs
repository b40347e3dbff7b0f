//! Catalog endpoints: domains and their member measures, collaborator-owned.

use reqwest::Client;
use serde::Deserialize;
use stride_core::models::{OutcomeDomain, OutcomeMeasure};
use tracing::info;

use crate::config::ApiConfig;
use crate::error::{ApiError, check};

#[derive(Debug, Deserialize)]
struct DomainsResponse {
    domains: Vec<OutcomeDomain>,
}

#[derive(Debug, Deserialize)]
struct MeasuresResponse {
    measures: Vec<OutcomeMeasure>,
}

#[derive(Debug, Deserialize)]
struct MeasureResponse {
    measure: OutcomeMeasure,
}

pub async fn list_domains(
    client: &Client,
    config: &ApiConfig,
) -> Result<Vec<OutcomeDomain>, ApiError> {
    let resp = client
        .get(config.url("/outcome-measures/domains"))
        .send()
        .await?;
    let resp = check(resp, "outcome domains").await?;
    let body: DomainsResponse = resp.json().await?;
    info!(count = body.domains.len(), "fetched outcome domains");
    Ok(body.domains)
}

pub async fn list_measures(
    client: &Client,
    config: &ApiConfig,
    domain_id: &str,
) -> Result<Vec<OutcomeMeasure>, ApiError> {
    let resp = client
        .get(config.url(&format!("/outcome-measures/domains/{domain_id}/measures")))
        .send()
        .await?;
    let resp = check(resp, &format!("domain '{domain_id}'")).await?;
    let body: MeasuresResponse = resp.json().await?;
    info!(domain_id, count = body.measures.len(), "fetched measures");
    Ok(body.measures)
}

pub async fn get_measure(
    client: &Client,
    config: &ApiConfig,
    measure_id: &str,
) -> Result<OutcomeMeasure, ApiError> {
    let resp = client
        .get(config.url(&format!("/outcome-measures/measures/{measure_id}")))
        .send()
        .await?;
    let resp = check(resp, &format!("measure '{measure_id}'")).await?;
    let body: MeasureResponse = resp.json().await?;
    Ok(body.measure)
}
