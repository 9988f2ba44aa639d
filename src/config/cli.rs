use crate::utils::error::{EssenceError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ladys-essence")]
#[command(about = "Menstrual cycle predictions rendered as USSD screens")]
pub struct CliConfig {
    /// Cycle log CSV: user_id,start_date,end_date,cycle_length,period_length
    #[arg(long)]
    pub cycles: String,

    /// Optional profile CSV: user_id,personal_cycle_length,personal_period_length
    #[arg(long)]
    pub profiles: Option<String>,

    #[arg(long)]
    pub user: String,

    /// Calendar months away from the current month
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub month_offset: i32,

    /// USSD key sequence such as "n*n*p"; takes precedence over --month-offset
    #[arg(long)]
    pub keys: Option<String>,

    /// Show the current cycle info screen
    #[arg(long)]
    pub current: bool,

    /// Print cycle statistics derived from the user's log
    #[arg(long)]
    pub stats: bool,

    /// Print the computed phase ranges as JSON instead of a screen
    #[arg(long)]
    pub json: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn today_override(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|source| {
                    EssenceError::DateParseError {
                        field: "--today".to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--cycles", &self.cycles)?;
        if let Some(profiles) = &self.profiles {
            validate_path("--profiles", profiles)?;
        }
        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        validate_non_empty_string("--user", &self.user)?;
        self.today_override()?;
        Ok(())
    }
}
