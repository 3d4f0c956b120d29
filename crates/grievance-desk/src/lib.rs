pub mod config;
pub mod desk;
pub mod dispatch;
pub mod error;
pub mod export;

pub use config::DeskConfig;
pub use desk::{Desk, InteractionScope};
pub use dispatch::Operation;
pub use error::{DeskError, DeskErrorKind, NotFound, Result};
pub use export::ReportExporter;
