use crate::domain::ids::{ComplaintId, CustomerId};
use crate::error::CoreError;
use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Open,
    Escalated,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::Escalated => "Escalated",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(ComplaintStatus::Open),
            "escalated" => Ok(ComplaintStatus::Escalated),
            "resolved" => Ok(ComplaintStatus::Resolved),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

/// Which lifecycle moves are accepted.
///
/// `Permissive` accepts every escalate/resolve regardless of the current
/// status, including moving a resolved complaint back to escalated.
/// `Strict` treats `Resolved` as terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Strict,
}

impl TransitionPolicy {
    pub fn allows(self, from: ComplaintStatus, to: ComplaintStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Strict => match (from, to) {
                (ComplaintStatus::Resolved, _) => false,
                (_, ComplaintStatus::Open) => false,
                _ => true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub customer_id: CustomerId,
    pub category: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: i64,
    pub sentiment: Sentiment,
}

/// A complaint joined with the name and contact of its owning customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintWithCustomer {
    pub complaint: Complaint,
    pub customer_name: String,
    pub customer_contact: String,
}
