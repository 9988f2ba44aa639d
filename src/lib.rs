pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{PredictorSettings, TomlConfig};

pub use adapters::{CsvCycleStore, InMemoryHistory};
pub use self::core::{
    navigation::Screen,
    predictor::{build_report, CyclePredictor},
    report::MonthReport,
    stats::CycleStats,
    status::CycleStatus,
};
pub use utils::error::{EssenceError, Result};
