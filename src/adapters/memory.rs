use crate::domain::model::{CycleProfile, CycleRecord, UserId};
use crate::domain::ports::CycleHistory;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
struct UserCycles {
    records: Vec<CycleRecord>,
    profile: CycleProfile,
}

/// Cycle store held in memory. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    users: Arc<RwLock<HashMap<UserId, UserCycles>>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_record(&self, user: &UserId, record: CycleRecord) {
        let mut users = self.users.write().await;
        users.entry(user.clone()).or_default().records.push(record);
    }

    pub async fn set_profile(&self, user: &UserId, profile: CycleProfile) {
        let mut users = self.users.write().await;
        users.entry(user.clone()).or_default().profile = profile;
    }

    pub async fn records(&self, user: &UserId) -> Vec<CycleRecord> {
        let users = self.users.read().await;
        users
            .get(user)
            .map(|cycles| cycles.records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CycleHistory for InMemoryHistory {
    async fn most_recent_cycle(&self, user: &UserId) -> Result<Option<CycleRecord>> {
        let users = self.users.read().await;
        Ok(users.get(user).and_then(|cycles| {
            cycles
                .records
                .iter()
                .max_by_key(|record| record.start_date)
                .cloned()
        }))
    }

    async fn cycle_profile(&self, user: &UserId) -> Result<CycleProfile> {
        let users = self.users.read().await;
        Ok(users
            .get(user)
            .map(|cycles| cycles.profile)
            .unwrap_or_default())
    }
}
