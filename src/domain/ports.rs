use crate::domain::model::{CycleProfile, CycleRecord, UserId};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only access to a user's logged cycles, owned by the data layer.
#[async_trait]
pub trait CycleHistory: Send + Sync {
    /// The record with the latest `start_date`, if the user has logged any.
    async fn most_recent_cycle(&self, user: &UserId) -> Result<Option<CycleRecord>>;

    async fn cycle_profile(&self, user: &UserId) -> Result<CycleProfile>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
