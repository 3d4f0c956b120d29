use crate::domain::{
    Complaint, ComplaintId, ComplaintStatus, ComplaintWithCustomer, CustomerId, DailyMetrics,
    Interaction, InteractionId,
};
use crate::sentiment::Sentiment;
use crate::time::format_timestamp_datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterOutcomeDto {
    pub complaint_id: ComplaintId,
    pub message: String,
    pub status: ComplaintStatus,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintStatusDto {
    pub complaint_id: ComplaintId,
    pub customer: String,
    pub contact: String,
    pub category: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: String,
    pub sentiment: Sentiment,
}

impl From<ComplaintWithCustomer> for ComplaintStatusDto {
    fn from(value: ComplaintWithCustomer) -> Self {
        let ComplaintWithCustomer {
            complaint,
            customer_name,
            customer_contact,
        } = value;
        Self {
            complaint_id: complaint.id,
            customer: customer_name,
            contact: customer_contact,
            category: complaint.category,
            description: complaint.description,
            status: complaint.status,
            created_at: format_timestamp_datetime(complaint.created_at),
            sentiment: complaint.sentiment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintSummaryDto {
    pub id: ComplaintId,
    pub category: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: String,
    pub sentiment: Sentiment,
}

impl From<Complaint> for ComplaintSummaryDto {
    fn from(complaint: Complaint) -> Self {
        Self {
            id: complaint.id,
            category: complaint.category,
            description: complaint.description,
            status: complaint.status,
            created_at: format_timestamp_datetime(complaint.created_at),
            sentiment: complaint.sentiment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerHistoryDto {
    pub customer: String,
    pub history: Vec<ComplaintSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationDto {
    pub complaint_id: ComplaintId,
    pub status: ComplaintStatus,
    pub reason: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionDto {
    pub complaint_id: ComplaintId,
    pub status: ComplaintStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportExportDto {
    pub customer: String,
    pub exported_complaints: Vec<ComplaintSummaryDto>,
    pub csv_file: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentMatchDto {
    pub id: ComplaintId,
    pub customer: String,
    pub contact: String,
    pub category: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: String,
    pub sentiment: Sentiment,
}

impl From<ComplaintWithCustomer> for SentimentMatchDto {
    fn from(value: ComplaintWithCustomer) -> Self {
        let status = ComplaintStatusDto::from(value);
        Self {
            id: status.complaint_id,
            customer: status.customer,
            contact: status.contact,
            category: status.category,
            description: status.description,
            status: status.status,
            created_at: status.created_at,
            sentiment: status.sentiment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDto {
    pub id: InteractionId,
    pub customer_id: CustomerId,
    pub complaint_id: Option<ComplaintId>,
    pub message: String,
    pub sender: String,
    pub sentiment: Sentiment,
    pub timestamp: String,
}

impl From<Interaction> for InteractionDto {
    fn from(value: Interaction) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            complaint_id: value.complaint_id,
            message: value.message,
            sender: value.sender,
            sentiment: value.sentiment,
            timestamp: format_timestamp_datetime(value.timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMetricsDto {
    pub date: String,
    pub total_complaints: i64,
    pub resolved_complaints: i64,
    pub escalations: i64,
}

impl DailyMetricsDto {
    /// Counters for a day that has not seen any event yet.
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            total_complaints: 0,
            resolved_complaints: 0,
            escalations: 0,
        }
    }
}

impl From<DailyMetrics> for DailyMetricsDto {
    fn from(value: DailyMetrics) -> Self {
        Self {
            date: value.date,
            total_complaints: value.total_complaints,
            resolved_complaints: value.resolved_complaints,
            escalations: value.escalations,
        }
    }
}

/// Body returned in place of a result when a domain lookup fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
