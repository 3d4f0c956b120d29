use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid sentiment label: {0}")]
    InvalidSentiment(String),
    #[error("invalid complaint status: {0}")]
    InvalidStatus(String),
    #[error("invalid metric field: {0}")]
    InvalidMetricField(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
