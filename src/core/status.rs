use crate::core::calendar::format_day;
use crate::core::report::warn_over_budget;
use crate::domain::fertility::{offset_days, FertilityModel, Phase, PredictionWindow};
use chrono::NaiveDate;
use serde::Serialize;

/// Checked in this order so ovulation beats the fertile window around it.
const PHASE_PRIORITY: [Phase; 5] = [
    Phase::Period,
    Phase::Ovulation,
    Phase::FertileWindow,
    Phase::Follicular,
    Phase::Luteal,
];

/// Where today falls in the cycle projected from the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleStatus {
    pub today: NaiveDate,
    /// 1-based.
    pub cycle_day: u32,
    pub phase: Phase,
    pub next_period: NaiveDate,
    pub current_cycle: PredictionWindow,
}

impl CycleStatus {
    /// Cycles repeat every `cycle_length` days from `anchor`, in both directions.
    pub fn at(
        anchor: NaiveDate,
        today: NaiveDate,
        cycle_length: u32,
        period_length: u32,
        model: &FertilityModel,
    ) -> Self {
        let length = i64::from(cycle_length.max(1));
        let elapsed = (today - anchor).num_days();
        let cycles_since_anchor = elapsed.div_euclid(length);
        let cycle_start = offset_days(anchor, cycles_since_anchor * length);
        let current_cycle = PredictionWindow::compute(cycle_start, cycle_length, period_length, model);

        let phase = PHASE_PRIORITY
            .into_iter()
            .find(|phase| current_cycle.range(*phase).contains(today))
            .unwrap_or(Phase::Follicular);

        Self {
            today,
            // rem_euclid(length) is in 0..length and length fits u32
            cycle_day: elapsed.rem_euclid(length) as u32 + 1,
            phase,
            next_period: current_cycle.next_cycle_start(),
            current_cycle,
        }
    }

    pub fn render(&self, line_budget: usize) -> String {
        let lines = vec![
            format!("Day {} of {}", self.cycle_day, self.current_cycle.cycle_length),
            format!("Phase: {}", self.phase.label()),
            format!("Next period: {}", format_day(self.next_period)),
            "n. This month".to_string(),
        ];
        warn_over_budget(&lines, line_budget);
        lines.join("\n")
    }
}
