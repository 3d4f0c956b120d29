use grievance_core::domain::TransitionPolicy;
use std::path::PathBuf;

pub const DEFAULT_REPORTS_DIR: &str = "reports";

/// Settings a [`crate::Desk`] is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    pub reports_dir: PathBuf,
    pub policy: TransitionPolicy,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            policy: TransitionPolicy::default(),
        }
    }
}
