use crate::config::DeskConfig;
use crate::error::{DeskError, NotFound, Result};
use crate::export::ReportExporter;
use grievance_core::domain::{
    ComplaintId, ComplaintStatus, CustomerId, Interaction, MetricField, DEFAULT_SENDER,
};
use grievance_core::dto::{
    ComplaintStatusDto, ComplaintSummaryDto, CustomerHistoryDto, DailyMetricsDto, EscalationDto,
    InteractionDto, RegisterOutcomeDto, ReportExportDto, ResolutionDto, SentimentMatchDto,
};
use grievance_core::sentiment::{LexiconScorer, Sentiment, SentimentClassifier};
use grievance_core::time::{local_date_key, now_utc};
use grievance_store::error::StoreError;
use grievance_store::repo::{ComplaintNew, InteractionNew};
use grievance_store::Store;
use tracing::{debug, info, warn};

/// Which interactions to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionScope {
    Customer(CustomerId),
    Complaint(ComplaintId),
}

/// Complaint desk over one store session.
///
/// Every write operation runs in a single immediate transaction; an error
/// anywhere drops it and nothing is persisted. The `*_at` variants take the
/// current time explicitly.
pub struct Desk {
    store: Store,
    classifier: Box<dyn SentimentClassifier + Send + Sync>,
    config: DeskConfig,
}

impl Desk {
    pub fn new(store: Store, config: DeskConfig) -> Self {
        Self::with_classifier(store, Box::new(LexiconScorer::new()), config)
    }

    pub fn with_classifier(
        store: Store,
        classifier: Box<dyn SentimentClassifier + Send + Sync>,
        config: DeskConfig,
    ) -> Self {
        Self {
            store,
            classifier,
            config,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn register(
        &self,
        customer_name: &str,
        contact: &str,
        category: &str,
        description: &str,
    ) -> Result<RegisterOutcomeDto> {
        self.register_at(now_utc(), customer_name, contact, category, description)
    }

    pub fn register_at(
        &self,
        now: i64,
        customer_name: &str,
        contact: &str,
        category: &str,
        description: &str,
    ) -> Result<RegisterOutcomeDto> {
        let sentiment = self.classifier.classify(description);

        let tx = self.store.begin()?;
        let customer = self
            .store
            .customers()
            .resolve_or_create(customer_name, contact)?;
        let complaint = self.store.complaints().insert(ComplaintNew {
            customer_id: customer.id,
            category: category.to_string(),
            description: description.to_string(),
            sentiment,
            created_at: now,
        })?;
        self.store
            .metrics()
            .increment(MetricField::TotalComplaints, &local_date_key(now))?;
        tx.commit().map_err(StoreError::from)?;

        info!(
            complaint_id = %complaint.id,
            customer_id = %customer.id,
            sentiment = %sentiment,
            "complaint registered"
        );
        Ok(RegisterOutcomeDto {
            complaint_id: complaint.id,
            message: format!(
                "Complaint {} registered for {} in category '{}'.",
                complaint.id, customer_name, category
            ),
            status: complaint.status,
            sentiment,
        })
    }

    pub fn get_status(&self, complaint_id: ComplaintId) -> Result<ComplaintStatusDto> {
        let complaint = self
            .store
            .complaints()
            .get_with_customer(complaint_id)?
            .ok_or(NotFound::Complaint(complaint_id))?;
        Ok(ComplaintStatusDto::from(complaint))
    }

    pub fn get_history(&self, customer_name: &str) -> Result<CustomerHistoryDto> {
        let history = self.history_rows(customer_name)?;
        Ok(CustomerHistoryDto {
            customer: customer_name.to_string(),
            history,
        })
    }

    pub fn escalate(&self, complaint_id: ComplaintId, reason: &str) -> Result<EscalationDto> {
        self.escalate_at(now_utc(), complaint_id, reason)
    }

    pub fn escalate_at(
        &self,
        now: i64,
        complaint_id: ComplaintId,
        reason: &str,
    ) -> Result<EscalationDto> {
        let tx = self.store.begin()?;
        self.transition(complaint_id, ComplaintStatus::Escalated)?;
        self.store
            .metrics()
            .increment(MetricField::Escalations, &local_date_key(now))?;
        tx.commit().map_err(StoreError::from)?;

        info!(complaint_id = %complaint_id, reason, "complaint escalated");
        Ok(EscalationDto {
            complaint_id,
            status: ComplaintStatus::Escalated,
            reason: reason.to_string(),
            message: format!("Complaint {complaint_id} has been escalated due to: {reason}"),
        })
    }

    pub fn resolve(&self, complaint_id: ComplaintId) -> Result<ResolutionDto> {
        self.resolve_at(now_utc(), complaint_id)
    }

    pub fn resolve_at(&self, now: i64, complaint_id: ComplaintId) -> Result<ResolutionDto> {
        let tx = self.store.begin()?;
        self.transition(complaint_id, ComplaintStatus::Resolved)?;
        self.store
            .metrics()
            .increment(MetricField::ResolvedComplaints, &local_date_key(now))?;
        tx.commit().map_err(StoreError::from)?;

        info!(complaint_id = %complaint_id, "complaint resolved");
        Ok(ResolutionDto {
            complaint_id,
            status: ComplaintStatus::Resolved,
            message: format!("Complaint {complaint_id} has been marked as resolved."),
        })
    }

    /// Writes the customer's complaints to `<reports_dir>/<slug>_report.csv`.
    /// No file is touched when the customer has no complaints.
    pub fn export_report(&self, customer_name: &str) -> Result<ReportExportDto> {
        let complaints = self.history_rows(customer_name)?;
        let exporter = ReportExporter::new(&self.config.reports_dir);
        let path = exporter.write(customer_name, &complaints)?;
        let csv_file = path.display().to_string();

        info!(customer = customer_name, path = %csv_file, rows = complaints.len(), "report exported");
        Ok(ReportExportDto {
            customer: customer_name.to_string(),
            exported_complaints: complaints,
            message: format!("Report exported successfully to {csv_file}"),
            csv_file,
        })
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        self.classifier.classify(text)
    }

    pub fn get_by_sentiment(&self, sentiment: &str) -> Result<Vec<SentimentMatchDto>> {
        let matches = self.store.complaints().list_by_sentiment(sentiment)?;
        if matches.is_empty() {
            return Err(NotFound::Sentiment(sentiment.to_string()).into());
        }
        Ok(matches.into_iter().map(SentimentMatchDto::from).collect())
    }

    /// Appends one interaction. `sender` defaults to `"user"`. Referenced ids
    /// are recorded as given, without checking that they exist.
    pub fn log_interaction(
        &self,
        customer_id: CustomerId,
        complaint_id: Option<ComplaintId>,
        message: &str,
        sender: Option<&str>,
    ) -> Result<Interaction> {
        self.log_interaction_at(now_utc(), customer_id, complaint_id, message, sender)
    }

    pub fn log_interaction_at(
        &self,
        now: i64,
        customer_id: CustomerId,
        complaint_id: Option<ComplaintId>,
        message: &str,
        sender: Option<&str>,
    ) -> Result<Interaction> {
        let sentiment = self.classifier.classify(message);
        let tx = self.store.begin()?;
        let interaction = self.store.interactions().add(InteractionNew {
            customer_id,
            complaint_id,
            message: message.to_string(),
            sender: sender.unwrap_or(DEFAULT_SENDER).to_string(),
            sentiment,
            timestamp: now,
        })?;
        tx.commit().map_err(StoreError::from)?;

        debug!(
            interaction_id = %interaction.id,
            customer_id = %customer_id,
            sentiment = %sentiment,
            "interaction logged"
        );
        Ok(interaction)
    }

    pub fn list_interactions(&self, scope: InteractionScope) -> Result<Vec<InteractionDto>> {
        let interactions = match scope {
            InteractionScope::Customer(id) => self.store.interactions().list_for_customer(id)?,
            InteractionScope::Complaint(id) => self.store.interactions().list_for_complaint(id)?,
        };
        Ok(interactions.into_iter().map(InteractionDto::from).collect())
    }

    /// Counters for one `YYYY-MM-DD` day; zeroes when nothing happened.
    pub fn daily_metrics(&self, date: &str) -> Result<DailyMetricsDto> {
        let metrics = self.store.metrics().get(date)?;
        Ok(metrics
            .map(DailyMetricsDto::from)
            .unwrap_or_else(|| DailyMetricsDto::empty(date)))
    }

    fn history_rows(&self, customer_name: &str) -> Result<Vec<ComplaintSummaryDto>> {
        let complaints = self
            .store
            .complaints()
            .list_for_customer_name(customer_name)?;
        if complaints.is_empty() {
            return Err(NotFound::CustomerHistory(customer_name.to_string()).into());
        }
        Ok(complaints
            .into_iter()
            .map(ComplaintSummaryDto::from)
            .collect())
    }

    fn transition(&self, complaint_id: ComplaintId, to: ComplaintStatus) -> Result<()> {
        let complaint = self
            .store
            .complaints()
            .get(complaint_id)?
            .ok_or(NotFound::Complaint(complaint_id))?;

        if !self.config.policy.allows(complaint.status, to) {
            warn!(
                complaint_id = %complaint_id,
                from = %complaint.status,
                to = %to,
                "transition refused"
            );
            return Err(DeskError::Transition {
                complaint_id,
                from: complaint.status,
                to,
            });
        }

        if !self.store.complaints().set_status(complaint_id, to)? {
            return Err(NotFound::Complaint(complaint_id).into());
        }
        Ok(())
    }
}
