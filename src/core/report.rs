use crate::core::calendar::{format_placed, MonthWindow, Placement};
use crate::domain::fertility::{Phase, PhaseRange, PredictionWindow};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseLine {
    pub phase: Phase,
    pub range: PhaseRange,
    pub placement: Placement,
}

impl PhaseLine {
    pub fn text(&self) -> String {
        format!("{}: {}", self.phase.label(), format_placed(self.range, self.placement))
    }
}

/// All five phases of one prediction, labelled against a requested month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub month_offset: i32,
    pub month: MonthWindow,
    pub prediction: PredictionWindow,
    pub lines: Vec<PhaseLine>,
}

impl MonthReport {
    pub fn new(prediction: PredictionWindow, month: MonthWindow, month_offset: i32) -> Self {
        let lines = prediction
            .phases()
            .map(|(phase, range)| PhaseLine {
                phase,
                range,
                placement: month.classify(range),
            })
            .collect();

        Self {
            month_offset,
            month,
            prediction,
            lines,
        }
    }

    pub fn line(&self, phase: Phase) -> Option<&PhaseLine> {
        self.lines.iter().find(|line| line.phase == phase)
    }

    pub fn previous_label(&self) -> &'static str {
        if self.month_offset == 0 {
            "p. Current cycle info"
        } else {
            "p. Previous month"
        }
    }

    /// Screen text: phase lines, the legend, then navigation.
    pub fn render(&self, line_budget: usize) -> String {
        let mut out = Vec::with_capacity(self.lines.len() * 2 + 4);
        out.push(format!("Cycle {}", self.month));
        out.extend(self.lines.iter().map(PhaseLine::text));
        out.push("Key:".to_string());
        out.extend(Phase::ALL.iter().map(|phase| phase.legend().to_string()));
        out.push("n. Next month".to_string());
        out.push(self.previous_label().to_string());

        warn_over_budget(&out, line_budget);
        out.join("\n")
    }
}

pub(crate) fn warn_over_budget(lines: &[String], line_budget: usize) {
    for line in lines.iter().filter(|line| line.chars().count() > line_budget) {
        tracing::warn!(
            "Rendered line exceeds {} characters ({}): {}",
            line_budget,
            line.chars().count(),
            line
        );
    }
}
