use serde::{Deserialize, Serialize};

/// A manual adjustment applied to a timer's minutes after the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEdit {
    #[serde(default)]
    pub team_user_id: String,
    pub created_at: bson::DateTime,
    pub minutes: i32,
}
