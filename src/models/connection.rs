use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A recorded contact from a student to a tutor.
#[derive(Debug, Clone)]
pub struct UserConnection {
    pub id: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewConnection {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionsTotal {
    pub total: i64,
}
