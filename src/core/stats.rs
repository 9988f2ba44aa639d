use crate::domain::model::{CycleProfile, CycleRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// Number of most recent cycles the averages look at.
pub const RECENT_CYCLES: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleStats {
    pub total_cycles: usize,
    pub avg_cycle_length: Option<u32>,
    pub avg_period_length: Option<u32>,
    pub shortest_cycle: Option<u32>,
    pub longest_cycle: Option<u32>,
    pub last_period_start: Option<NaiveDate>,
}

impl CycleStats {
    pub fn from_records(records: &[CycleRecord]) -> Self {
        let mut sorted: Vec<&CycleRecord> = records.iter().collect();
        sorted.sort_by_key(|record| record.start_date);

        let recent = &sorted[sorted.len().saturating_sub(RECENT_CYCLES)..];

        let cycle_lengths: Vec<u32> = recent
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                record.cycle_length.or_else(|| {
                    recent.get(i + 1).and_then(|next| {
                        u32::try_from((next.start_date - record.start_date).num_days()).ok()
                    })
                })
            })
            .filter(|length| *length > 0)
            .collect();

        let period_lengths: Vec<u32> = recent
            .iter()
            .filter_map(|record| {
                record.period_length.or_else(|| {
                    record.end_date.and_then(|end| {
                        u32::try_from((end - record.start_date).num_days() + 1).ok()
                    })
                })
            })
            .filter(|length| *length > 0)
            .collect();

        Self {
            total_cycles: sorted.len(),
            avg_cycle_length: rounded_mean(&cycle_lengths),
            avg_period_length: rounded_mean(&period_lengths),
            shortest_cycle: cycle_lengths.iter().copied().min(),
            longest_cycle: cycle_lengths.iter().copied().max(),
            last_period_start: sorted.last().map(|record| record.start_date),
        }
    }

    pub fn to_profile(&self) -> CycleProfile {
        CycleProfile {
            personal_cycle_length: self.avg_cycle_length,
            personal_period_length: self.avg_period_length,
        }
    }

    pub fn render(&self) -> String {
        let days = |value: Option<u32>| {
            value
                .map(|v| format!("{} days", v))
                .unwrap_or_else(|| "unknown".to_string())
        };

        [
            format!("Cycles logged: {}", self.total_cycles),
            format!("Avg cycle: {}", days(self.avg_cycle_length)),
            format!("Avg period: {}", days(self.avg_period_length)),
            format!(
                "Shortest/longest: {}/{}",
                days(self.shortest_cycle),
                days(self.longest_cycle)
            ),
        ]
        .join("\n")
    }
}

fn rounded_mean(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|v| u64::from(*v)).sum();
    Some((sum as f64 / values.len() as f64).round() as u32)
}
