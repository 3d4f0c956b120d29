pub mod complaint;
pub mod customer;
pub mod ids;
pub mod interaction;
pub mod metrics;

pub use complaint::{Complaint, ComplaintStatus, ComplaintWithCustomer, TransitionPolicy};
pub use customer::{customer_name_key, Customer};
pub use ids::{ComplaintId, CustomerId, DailyMetricsId, InteractionId};
pub use interaction::{Interaction, DEFAULT_SENDER};
pub use metrics::{DailyMetrics, MetricField};
