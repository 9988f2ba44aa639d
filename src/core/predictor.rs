use crate::config::PredictorSettings;
use crate::core::calendar::MonthWindow;
use crate::core::navigation::Screen;
use crate::core::report::MonthReport;
use crate::core::status::CycleStatus;
use crate::domain::fertility::{FertilityModel, PredictionWindow};
use crate::domain::model::{CycleProfile, PredictionInput, UserId};
use crate::domain::ports::{Clock, CycleHistory};
use crate::utils::error::{EssenceError, Result};
use chrono::NaiveDate;

/// Cycle and period length to predict with, after falling back to defaults.
///
/// A profile cycle shorter than the model's luteal phase, a zero period, or a
/// period not shorter than the cycle is treated as unset.
pub fn resolve_lengths(
    profile: &CycleProfile,
    settings: &PredictorSettings,
    model: &FertilityModel,
) -> (u32, u32) {
    let cycle_length = match profile.personal_cycle_length {
        Some(length) if length >= model.min_cycle_length() => length,
        Some(length) => {
            tracing::warn!(
                "Ignoring personal cycle length {} (minimum {}), using default {}",
                length,
                model.min_cycle_length(),
                settings.default_cycle_length
            );
            settings.default_cycle_length
        }
        None => settings.default_cycle_length,
    };

    let default_period = settings
        .default_period_length
        .min(cycle_length.saturating_sub(1))
        .max(1);
    let period_length = match profile.personal_period_length {
        Some(length) if length >= 1 && length < cycle_length => length,
        Some(length) => {
            tracing::warn!(
                "Ignoring personal period length {} for a {}-day cycle, using default {}",
                length,
                cycle_length,
                default_period
            );
            default_period
        }
        None => default_period,
    };

    (cycle_length, period_length)
}

/// Phase ranges anchored on the most recent cycle start, or on `today` without history.
pub fn predict_window(
    input: &PredictionInput,
    today: NaiveDate,
    settings: &PredictorSettings,
    model: &FertilityModel,
) -> PredictionWindow {
    let (cycle_length, period_length) = resolve_lengths(&input.profile, settings, model);
    let cycle_start = input
        .most_recent
        .as_ref()
        .map(|record| record.start_date)
        .unwrap_or(today);

    PredictionWindow::compute(cycle_start, cycle_length, period_length, model)
}

/// The month report for `month_offset`. The offset only picks the month the
/// phases are labelled against; it never moves the anchor.
pub fn build_report(
    input: &PredictionInput,
    today: NaiveDate,
    month_offset: i32,
    settings: &PredictorSettings,
    model: &FertilityModel,
) -> MonthReport {
    let prediction = predict_window(input, today, settings, model);
    let month = MonthWindow::offset_from(today, month_offset);

    tracing::debug!(
        "Prediction anchored on {} ({}-day cycle, {}-day period) labelled against {}",
        prediction.cycle_start,
        prediction.cycle_length,
        prediction.period_length,
        month
    );

    MonthReport::new(prediction, month, month_offset)
}

pub fn current_cycle_info(
    input: &PredictionInput,
    today: NaiveDate,
    settings: &PredictorSettings,
    model: &FertilityModel,
) -> CycleStatus {
    let prediction = predict_window(input, today, settings, model);
    CycleStatus::at(
        prediction.cycle_start,
        today,
        prediction.cycle_length,
        prediction.period_length,
        model,
    )
}

/// Looks up a user's cycle data through the ports and renders USSD screens.
pub struct CyclePredictor<H: CycleHistory, C: Clock> {
    history: H,
    clock: C,
    settings: PredictorSettings,
    model: FertilityModel,
}

impl<H: CycleHistory, C: Clock> CyclePredictor<H, C> {
    pub fn new(history: H, clock: C, settings: PredictorSettings) -> Self {
        Self {
            history,
            clock,
            settings,
            model: FertilityModel::STANDARD,
        }
    }

    pub fn with_model(mut self, model: FertilityModel) -> Self {
        self.model = model;
        self
    }

    pub fn settings(&self) -> &PredictorSettings {
        &self.settings
    }

    /// Both lookups run concurrently. Any failure surfaces as `DataUnavailable`.
    pub async fn load_input(&self, user: &UserId) -> Result<PredictionInput> {
        let (most_recent, profile) = tokio::try_join!(
            self.history.most_recent_cycle(user),
            self.history.cycle_profile(user)
        )
        .map_err(|e| match e {
            EssenceError::DataUnavailable { .. } => e,
            other => EssenceError::data_unavailable(user.as_str(), other.to_string()),
        })?;

        tracing::debug!(
            "Loaded cycle data for user {}: most recent start {:?}, profile {:?}",
            user,
            most_recent.as_ref().map(|record| record.start_date),
            profile
        );

        Ok(PredictionInput {
            most_recent,
            profile,
        })
    }

    pub async fn window(&self, user: &UserId) -> Result<PredictionWindow> {
        let input = self.load_input(user).await?;
        Ok(predict_window(&input, self.clock.today(), &self.settings, &self.model))
    }

    pub async fn report(&self, user: &UserId, month_offset: i32) -> Result<MonthReport> {
        let input = self.load_input(user).await?;
        Ok(build_report(
            &input,
            self.clock.today(),
            month_offset,
            &self.settings,
            &self.model,
        ))
    }

    /// The month screen for `month_offset` (0 = this month).
    pub async fn predict(&self, user: &UserId, month_offset: i32) -> Result<String> {
        let report = self.report(user, month_offset).await?;
        Ok(report.render(self.settings.line_budget))
    }

    pub async fn current_cycle_info(&self, user: &UserId) -> Result<String> {
        let input = self.load_input(user).await?;
        let status = current_cycle_info(&input, self.clock.today(), &self.settings, &self.model);
        Ok(status.render(self.settings.line_budget))
    }

    /// Resolves a USSD key string such as `n*n*p` and renders the screen it lands on.
    pub async fn respond(&self, user: &UserId, keys: &str) -> Result<String> {
        match Screen::from_keys(keys)? {
            Screen::Month(offset) => self.predict(user, offset).await,
            Screen::CurrentCycle => self.current_cycle_info(user).await,
        }
    }
}
