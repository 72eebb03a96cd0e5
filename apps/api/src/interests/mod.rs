//! User interest feed: the interest set each user last submitted.
//!
//! Saving replaces the previous set wholesale. Carried in `AppState` as
//! `Arc<dyn InterestStore>`.

pub mod handlers;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interest::UserInterests;

#[async_trait]
pub trait InterestStore: Send + Sync {
    /// Saved interests for a user, empty if nothing was submitted yet.
    async fn get(&self, user_id: Uuid) -> Result<Vec<String>, AppError>;

    /// Replaces the user's interest set.
    async fn replace(&self, user_id: Uuid, interests: Vec<String>) -> Result<UserInterests, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryInterestStore {
    entries: RwLock<HashMap<Uuid, UserInterests>>,
}

impl InMemoryInterestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InterestStore for InMemoryInterestStore {
    async fn get(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        Ok(self
            .entries
            .read()
            .await
            .get(&user_id)
            .map(|entry| entry.interests.clone())
            .unwrap_or_default())
    }

    async fn replace(&self, user_id: Uuid, interests: Vec<String>) -> Result<UserInterests, AppError> {
        let entry = UserInterests {
            user_id,
            interests,
            updated_at: Utc::now(),
        };
        self.entries.write().await.insert(user_id, entry.clone());
        info!(
            "Saved {} interests for user {user_id}",
            entry.interests.len()
        );
        Ok(entry)
    }
}
