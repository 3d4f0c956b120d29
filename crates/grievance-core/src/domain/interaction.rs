use crate::domain::ids::{ComplaintId, CustomerId, InteractionId};
use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SENDER: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    pub customer_id: CustomerId,
    pub complaint_id: Option<ComplaintId>,
    pub message: String,
    pub sender: String,
    pub sentiment: Sentiment,
    pub timestamp: i64,
}
