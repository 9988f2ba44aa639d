pub mod calendar;
pub mod navigation;
pub mod predictor;
pub mod report;
pub mod stats;
pub mod status;

pub use crate::domain::fertility::{FertilityModel, Phase, PhaseRange, PredictionWindow};
pub use crate::domain::model::{CycleProfile, CycleRecord, PredictionInput, UserId};
pub use crate::domain::ports::{Clock, CycleHistory, FixedClock, SystemClock};
pub use crate::utils::error::Result;
