use crate::desk::{Desk, InteractionScope};
use crate::error::{DeskError, Result};
use grievance_core::domain::{ComplaintId, CustomerId};
use grievance_core::dto::ErrorDto;
use grievance_core::time::{local_date_key, now_utc, parse_date_key};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A named desk call, as sent by an external caller.
///
/// Serialized as an object tagged by `op`. The legacy function names are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    #[serde(alias = "book_complaint")]
    Register {
        customer_name: String,
        contact: String,
        category: String,
        description: String,
    },
    #[serde(alias = "check_status")]
    GetStatus { complaint_id: ComplaintId },
    #[serde(alias = "get_customer_history")]
    GetHistory { customer_name: String },
    #[serde(alias = "escalate_complaint")]
    Escalate {
        complaint_id: ComplaintId,
        reason: String,
    },
    #[serde(alias = "resolve_complaint")]
    Resolve { complaint_id: ComplaintId },
    ExportReport { customer_name: String },
    #[serde(alias = "analyze_sentiment")]
    Classify { text: String },
    #[serde(alias = "get_complaints_by_sentiment")]
    GetBySentiment { sentiment: String },
    LogInteraction {
        customer_id: CustomerId,
        #[serde(default)]
        complaint_id: Option<ComplaintId>,
        message: String,
        #[serde(default)]
        sender: Option<String>,
    },
    DailyMetrics {
        #[serde(default)]
        date: Option<String>,
    },
    ListInteractions {
        #[serde(default)]
        customer_id: Option<CustomerId>,
        #[serde(default)]
        complaint_id: Option<ComplaintId>,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Register { .. } => "register",
            Operation::GetStatus { .. } => "get_status",
            Operation::GetHistory { .. } => "get_history",
            Operation::Escalate { .. } => "escalate",
            Operation::Resolve { .. } => "resolve",
            Operation::ExportReport { .. } => "export_report",
            Operation::Classify { .. } => "classify",
            Operation::GetBySentiment { .. } => "get_by_sentiment",
            Operation::LogInteraction { .. } => "log_interaction",
            Operation::DailyMetrics { .. } => "daily_metrics",
            Operation::ListInteractions { .. } => "list_interactions",
        }
    }
}

impl Desk {
    /// Runs `op` and returns its JSON result. Domain errors (not found,
    /// refused transitions, bad input) come back as `{"error": ..}` objects;
    /// only internal failures are `Err`.
    pub fn respond(&self, op: Operation) -> Result<Value> {
        let name = op.name();
        match self.execute(op) {
            Ok(value) => Ok(value),
            Err(err) if err.is_domain() => {
                debug!(op = name, error = %err, "operation returned an error result");
                Ok(serde_json::to_value(ErrorDto {
                    error: err.to_string(),
                })?)
            }
            Err(err) => Err(err),
        }
    }

    fn execute(&self, op: Operation) -> Result<Value> {
        let value = match op {
            Operation::Register {
                customer_name,
                contact,
                category,
                description,
            } => serde_json::to_value(self.register(
                &customer_name,
                &contact,
                &category,
                &description,
            )?)?,
            Operation::GetStatus { complaint_id } => {
                serde_json::to_value(self.get_status(complaint_id)?)?
            }
            Operation::GetHistory { customer_name } => {
                serde_json::to_value(self.get_history(&customer_name)?)?
            }
            Operation::Escalate {
                complaint_id,
                reason,
            } => serde_json::to_value(self.escalate(complaint_id, &reason)?)?,
            Operation::Resolve { complaint_id } => {
                serde_json::to_value(self.resolve(complaint_id)?)?
            }
            Operation::ExportReport { customer_name } => {
                serde_json::to_value(self.export_report(&customer_name)?)?
            }
            Operation::Classify { text } => serde_json::to_value(self.classify(&text))?,
            Operation::GetBySentiment { sentiment } => {
                serde_json::to_value(self.get_by_sentiment(&sentiment)?)?
            }
            Operation::LogInteraction {
                customer_id,
                complaint_id,
                message,
                sender,
            } => {
                self.log_interaction(customer_id, complaint_id, &message, sender.as_deref())?;
                Value::Null
            }
            Operation::DailyMetrics { date } => {
                let date = match date {
                    Some(value) => parse_date_key(&value)?,
                    None => local_date_key(now_utc()),
                };
                serde_json::to_value(self.daily_metrics(&date)?)?
            }
            Operation::ListInteractions {
                customer_id,
                complaint_id,
            } => {
                let scope = match (complaint_id, customer_id) {
                    (Some(id), _) => InteractionScope::Complaint(id),
                    (None, Some(id)) => InteractionScope::Customer(id),
                    (None, None) => {
                        return Err(DeskError::InvalidInput(
                            "list_interactions requires complaint_id or customer_id".to_string(),
                        ))
                    }
                };
                serde_json::to_value(self.list_interactions(scope)?)?
            }
        };
        Ok(value)
    }
}
