//! Cycle logs loaded from CSV exports.
//!
//! Cycle file header: `user_id,start_date,end_date,cycle_length,period_length`.
//! Profile file header: `user_id,personal_cycle_length,personal_period_length`.
//! Dates are `YYYY-MM-DD`; empty cells are absent values.

use crate::core::stats::CycleStats;
use crate::domain::model::{CycleProfile, CycleRecord, UserId};
use crate::domain::ports::CycleHistory;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct CycleRow {
    user_id: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    cycle_length: Option<u32>,
    period_length: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    user_id: String,
    personal_cycle_length: Option<u32>,
    personal_period_length: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct CsvCycleStore {
    records: Arc<HashMap<UserId, Vec<CycleRecord>>>,
    profiles: Arc<HashMap<UserId, CycleProfile>>,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

impl CsvCycleStore {
    pub fn from_paths<P: AsRef<Path>>(cycles: P, profiles: Option<P>) -> Result<Self> {
        tracing::debug!("Reading cycle log from {}", cycles.as_ref().display());
        let cycles = std::fs::File::open(cycles)?;

        let profiles = match profiles {
            Some(path) => {
                tracing::debug!("Reading profiles from {}", path.as_ref().display());
                Some(std::fs::File::open(path)?)
            }
            None => None,
        };

        Self::from_readers(cycles, profiles)
    }

    pub fn from_readers<R: Read>(cycles: R, profiles: Option<R>) -> Result<Self> {
        let mut records: HashMap<UserId, Vec<CycleRecord>> = HashMap::new();
        for row in reader(cycles).deserialize::<CycleRow>() {
            let row = row?;
            records
                .entry(UserId::new(row.user_id))
                .or_default()
                .push(CycleRecord {
                    start_date: row.start_date,
                    end_date: row.end_date,
                    cycle_length: row.cycle_length,
                    period_length: row.period_length,
                });
        }
        for user_records in records.values_mut() {
            user_records.sort_by_key(|record| record.start_date);
        }

        let mut profile_map = HashMap::new();
        if let Some(profiles) = profiles {
            for row in reader(profiles).deserialize::<ProfileRow>() {
                let row = row?;
                profile_map.insert(
                    UserId::new(row.user_id),
                    CycleProfile {
                        personal_cycle_length: row.personal_cycle_length,
                        personal_period_length: row.personal_period_length,
                    },
                );
            }
        }

        tracing::info!(
            "Loaded cycle logs for {} users ({} profiles)",
            records.len(),
            profile_map.len()
        );

        Ok(Self {
            records: Arc::new(records),
            profiles: Arc::new(profile_map),
        })
    }

    /// All of a user's records, oldest first.
    pub fn records(&self, user: &UserId) -> &[CycleRecord] {
        self.records.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stats(&self, user: &UserId) -> CycleStats {
        CycleStats::from_records(self.records(user))
    }
}

#[async_trait]
impl CycleHistory for CsvCycleStore {
    async fn most_recent_cycle(&self, user: &UserId) -> Result<Option<CycleRecord>> {
        Ok(self.records(user).last().cloned())
    }

    /// The stored profile, or averages from the user's log when none is stored.
    async fn cycle_profile(&self, user: &UserId) -> Result<CycleProfile> {
        match self.profiles.get(user) {
            Some(profile) => Ok(*profile),
            None => Ok(self.stats(user).to_profile()),
        }
    }
}
