use crate::domain::ids::CustomerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact: String,
}

/// Key used to deduplicate customers: the name compared case-insensitively,
/// the contact compared exactly.
pub fn customer_name_key(name: &str) -> String {
    name.to_lowercase()
}
