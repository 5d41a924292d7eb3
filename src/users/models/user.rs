use serde::{Deserialize, Serialize};

/// A user profile as served by the external users service. Never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub userid: i64,
    pub name: String,
}
