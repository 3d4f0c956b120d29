use crate::domain::ids::DailyMetricsId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed daily counters. Storage code maps each variant to a static
/// column name, so caller text never reaches SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    TotalComplaints,
    ResolvedComplaints,
    Escalations,
}

impl MetricField {
    pub const ALL: [MetricField; 3] = [
        MetricField::TotalComplaints,
        MetricField::ResolvedComplaints,
        MetricField::Escalations,
    ];

    pub fn column(self) -> &'static str {
        match self {
            MetricField::TotalComplaints => "total_complaints",
            MetricField::ResolvedComplaints => "resolved_complaints",
            MetricField::Escalations => "escalations",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for MetricField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricField::ALL
            .into_iter()
            .find(|field| field.column() == s.trim())
            .ok_or_else(|| CoreError::InvalidMetricField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub id: DailyMetricsId,
    pub date: String,
    pub total_complaints: i64,
    pub resolved_complaints: i64,
    pub escalations: i64,
}

impl DailyMetrics {
    pub fn value(&self, field: MetricField) -> i64 {
        match field {
            MetricField::TotalComplaints => self.total_complaints,
            MetricField::ResolvedComplaints => self.resolved_complaints,
            MetricField::Escalations => self.escalations,
        }
    }
}
