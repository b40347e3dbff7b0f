use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Server-side validation failures, shown verbatim. The server is
    /// authoritative for cross-field rules the client cannot know.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("entry has no id; it must be created before this operation")]
    MissingId,

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    validation_errors: Option<Vec<String>>,
}

/// Map a non-success response onto the error taxonomy: 404 → `NotFound`,
/// a `{ detail: { validation_errors } }` body → `Validation` with the
/// server's strings untouched, anything else → `Status`.
pub(crate) async fn check(
    resp: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound {
            resource: resource.to_string(),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    if let Some(errors) = parse_validation_errors(&body) {
        return Err(ApiError::Validation(errors));
    }
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Extract the collaborator's `{ detail: { validation_errors } }` list
/// from an error body, if present and non-empty.
pub fn parse_validation_errors(body: &str) -> Option<Vec<String>> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.detail?.validation_errors.filter(|v| !v.is_empty())
}
