use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("unknown measure: {0}")]
    UnknownMeasure(String),
}
