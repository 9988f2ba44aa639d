use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier as issued by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One logged cycle. `end_date` is `None` while the cycle is still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub cycle_length: Option<u32>,
    pub period_length: Option<u32>,
}

impl CycleRecord {
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: None,
            cycle_length: None,
            period_length: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleProfile {
    pub personal_cycle_length: Option<u32>,
    pub personal_period_length: Option<u32>,
}

impl CycleProfile {
    pub fn new(cycle_length: u32, period_length: u32) -> Self {
        Self {
            personal_cycle_length: Some(cycle_length),
            personal_period_length: Some(period_length),
        }
    }
}

/// Everything the predictor needs about one user: the two lookups from the data layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionInput {
    pub most_recent: Option<CycleRecord>,
    pub profile: CycleProfile,
}
