use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The interest set a user last submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInterests {
    pub user_id: Uuid,
    pub interests: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
