pub mod complaints;
pub mod customers;
pub mod interactions;
pub mod metrics;

pub use complaints::{ComplaintNew, ComplaintsRepo};
pub use customers::CustomersRepo;
pub use interactions::{InteractionNew, InteractionsRepo};
pub use metrics::MetricsRepo;
