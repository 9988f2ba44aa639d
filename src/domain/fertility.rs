//! Phase arithmetic for one menstrual cycle.
//!
//! Every phase is an offset from the cycle's first bleeding day. The offsets
//! around ovulation come from [`FertilityModel`]; the period and cycle
//! lengths come from the user's profile.

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

/// Day offsets around ovulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FertilityModel {
    /// Days from ovulation to the start of the next cycle.
    pub luteal_phase_days: u32,
    pub fertile_days_before_ovulation: u32,
    pub fertile_days_after_ovulation: u32,
}

impl FertilityModel {
    /// The 14-day luteal phase with a fertile window of ovulation -5..=+1.
    pub const STANDARD: Self = Self {
        luteal_phase_days: 14,
        fertile_days_before_ovulation: 5,
        fertile_days_after_ovulation: 1,
    };

    /// Shortest cycle for which ovulation does not fall before the cycle starts.
    pub fn min_cycle_length(&self) -> u32 {
        self.luteal_phase_days
    }
}

impl Default for FertilityModel {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Period,
    Follicular,
    FertileWindow,
    Ovulation,
    Luteal,
}

impl Phase {
    /// Report order.
    pub const ALL: [Phase; 5] = [
        Phase::Period,
        Phase::Follicular,
        Phase::FertileWindow,
        Phase::Ovulation,
        Phase::Luteal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Period => "Period",
            Phase::Follicular => "Follicular",
            Phase::FertileWindow => "Fertile window",
            Phase::Ovulation => "Ovulation",
            Phase::Luteal => "Luteal",
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            Phase::Period => "Period: bleeding days",
            Phase::Follicular => "Follicular: egg matures",
            Phase::FertileWindow => "Fertile: pregnancy likely",
            Phase::Ovulation => "Ovulation: egg released",
            Phase::Luteal => "Luteal: PMS may occur",
        }
    }
}

/// Inclusive date range. A range whose start is after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PhaseRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Adds `days` to `date`, saturating at the ends of the representable calendar.
pub fn offset_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// The five phases of the cycle that starts on `cycle_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionWindow {
    pub cycle_start: NaiveDate,
    pub cycle_length: u32,
    pub period_length: u32,
    pub period: PhaseRange,
    pub follicular: PhaseRange,
    pub fertile_window: PhaseRange,
    pub ovulation: PhaseRange,
    pub luteal: PhaseRange,
}

impl PredictionWindow {
    pub fn compute(
        cycle_start: NaiveDate,
        cycle_length: u32,
        period_length: u32,
        model: &FertilityModel,
    ) -> Self {
        let cycle_days = i64::from(cycle_length);
        let ovulation_day = offset_days(cycle_start, cycle_days - i64::from(model.luteal_phase_days));
        let period_end = offset_days(cycle_start, i64::from(period_length) - 1);

        Self {
            cycle_start,
            cycle_length,
            period_length,
            period: PhaseRange::new(cycle_start, period_end),
            follicular: PhaseRange::new(offset_days(period_end, 1), offset_days(ovulation_day, -1)),
            fertile_window: PhaseRange::new(
                offset_days(ovulation_day, -i64::from(model.fertile_days_before_ovulation)),
                offset_days(ovulation_day, i64::from(model.fertile_days_after_ovulation)),
            ),
            ovulation: PhaseRange::single(ovulation_day),
            luteal: PhaseRange::new(
                offset_days(ovulation_day, 1),
                offset_days(cycle_start, cycle_days - 1),
            ),
        }
    }

    pub fn range(&self, phase: Phase) -> PhaseRange {
        match phase {
            Phase::Period => self.period,
            Phase::Follicular => self.follicular,
            Phase::FertileWindow => self.fertile_window,
            Phase::Ovulation => self.ovulation,
            Phase::Luteal => self.luteal,
        }
    }

    pub fn phases(&self) -> impl Iterator<Item = (Phase, PhaseRange)> + '_ {
        Phase::ALL.into_iter().map(move |phase| (phase, self.range(phase)))
    }

    /// First day of the following cycle.
    pub fn next_cycle_start(&self) -> NaiveDate {
        offset_days(self.cycle_start, i64::from(self.cycle_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_standard_july_cycle() {
        let window = PredictionWindow::compute(date(2025, 7, 7), 28, 5, &FertilityModel::STANDARD);

        assert_eq!(window.period, PhaseRange::new(date(2025, 7, 7), date(2025, 7, 11)));
        assert_eq!(window.follicular, PhaseRange::new(date(2025, 7, 12), date(2025, 7, 20)));
        assert_eq!(window.fertile_window, PhaseRange::new(date(2025, 7, 16), date(2025, 7, 22)));
        assert_eq!(window.ovulation, PhaseRange::single(date(2025, 7, 21)));
        assert_eq!(window.luteal, PhaseRange::new(date(2025, 7, 22), date(2025, 8, 3)));
        assert_eq!(window.next_cycle_start(), date(2025, 8, 4));
    }

    #[test]
    fn test_phases_in_report_order() {
        let window = PredictionWindow::compute(date(2025, 1, 1), 30, 4, &FertilityModel::default());
        let order: Vec<Phase> = window.phases().map(|(phase, _)| phase).collect();
        assert_eq!(order, Phase::ALL.to_vec());
    }

    #[test]
    fn test_long_period_leaves_empty_follicular_phase() {
        // 21-day cycle: ovulation on day 8, period through day 8.
        let window = PredictionWindow::compute(date(2025, 3, 1), 21, 8, &FertilityModel::STANDARD);
        assert_eq!(window.ovulation.start, date(2025, 3, 8));
        assert!(window.follicular.is_empty());
    }

    #[test]
    fn test_offset_days_saturates() {
        assert_eq!(offset_days(NaiveDate::MAX, 10), NaiveDate::MAX);
        assert_eq!(offset_days(NaiveDate::MIN, -10), NaiveDate::MIN);
        assert_eq!(offset_days(date(2024, 2, 28), 1), date(2024, 2, 29));
    }
}
