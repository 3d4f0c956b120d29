use grievance_core::domain::{ComplaintId, ComplaintStatus};
use grievance_core::CoreError;
use grievance_store::error::StoreError;
use thiserror::Error;

/// Lookups that came back empty. The messages are part of the response
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("Complaint {0} not found")]
    Complaint(ComplaintId),
    #[error("No complaints found for {0}")]
    CustomerHistory(String),
    #[error("No complaints found with sentiment '{0}'")]
    Sentiment(String),
}

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error("Complaint {complaint_id} is already {}", .from.as_str().to_ascii_lowercase())]
    Transition {
        complaint_id: ComplaintId,
        from: ComplaintStatus,
        to: ComplaintStatus,
    },
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    Internal,
}

impl DeskError {
    pub fn kind(&self) -> DeskErrorKind {
        match self {
            DeskError::NotFound(_) => DeskErrorKind::NotFound,
            DeskError::Transition { .. } => DeskErrorKind::Conflict,
            DeskError::InvalidInput(_) | DeskError::Core(_) => DeskErrorKind::InvalidInput,
            DeskError::Store(_) | DeskError::Io(_) | DeskError::Json(_) => {
                DeskErrorKind::Internal
            }
        }
    }

    /// Domain outcomes are reported to callers as data instead of failures.
    pub fn is_domain(&self) -> bool {
        self.kind() != DeskErrorKind::Internal
    }
}
