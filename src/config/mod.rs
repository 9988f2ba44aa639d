#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

pub const DEFAULT_CYCLE_LENGTH: u32 = 28;
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;
pub const DEFAULT_LINE_BUDGET: usize = 160;

pub const MIN_CYCLE_LENGTH: u32 = 14;
pub const MAX_CYCLE_LENGTH: u32 = 60;
pub const MIN_LINE_BUDGET: usize = 40;
pub const MAX_LINE_BUDGET: usize = 512;

/// Fallbacks and layout limits handed to the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictorSettings {
    pub default_cycle_length: u32,
    pub default_period_length: u32,
    /// Longest line a rendered screen may contain.
    pub line_budget: usize,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            default_cycle_length: DEFAULT_CYCLE_LENGTH,
            default_period_length: DEFAULT_PERIOD_LENGTH,
            line_budget: DEFAULT_LINE_BUDGET,
        }
    }
}

impl Validate for PredictorSettings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "defaults.cycle_length",
            self.default_cycle_length,
            MIN_CYCLE_LENGTH,
            MAX_CYCLE_LENGTH,
        )?;
        validate_range(
            "defaults.period_length",
            self.default_period_length,
            1,
            self.default_cycle_length - 1,
        )?;
        validate_range(
            "report.line_budget",
            self.line_budget,
            MIN_LINE_BUDGET,
            MAX_LINE_BUDGET,
        )?;
        Ok(())
    }
}
