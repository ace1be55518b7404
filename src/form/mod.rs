//! Prediction form state machine
//!
//! The form walks four steps: season, driver, circuit, then submit. Each
//! selection moves the step counter forward. Picking an earlier selector
//! again changes that value but never moves the counter back.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::PredictionClient;
use crate::data::{find_driver, find_race, is_supported_season, Driver, Race};
use crate::error::{parse_experience, ClientError, FormError};
use crate::models::{PredictionRequest, PredictionResult};
use crate::render::format_confidence;

/// Anything that can answer a prediction request
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict_position(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError>;
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict_position(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError> {
        PredictionClient::predict_position(self, request).await
    }
}

/// Form steps, in order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Step {
    #[default]
    SeasonSelect,
    DriverSelect,
    CircuitSelect,
    ReadyToSubmit,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::SeasonSelect,
        Step::DriverSelect,
        Step::CircuitSelect,
        Step::ReadyToSubmit,
    ];

    /// 1-based step number
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::SeasonSelect => "Season",
            Step::DriverSelect => "Driver",
            Step::CircuitSelect => "Circuit",
            Step::ReadyToSubmit => "Predict",
        }
    }
}

/// Lifecycle of the current prediction request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Error(String),
}

/// In-progress selections plus the request lifecycle
#[derive(Debug, Clone, Default)]
pub struct FormController {
    season: Option<u16>,
    driver: Option<&'static Driver>,
    race: Option<&'static Race>,
    experience_override: Option<u32>,
    step: Step,
    status: RequestStatus,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn season(&self) -> Option<u16> {
        self.season
    }

    pub fn driver(&self) -> Option<&'static Driver> {
        self.driver
    }

    pub fn race(&self) -> Option<&'static Race> {
        self.race
    }

    pub fn experience_override(&self) -> Option<u32> {
        self.experience_override
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading)
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        match self.status {
            RequestStatus::Success(ref result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self.status {
            RequestStatus::Error(ref message) => Some(message),
            _ => None,
        }
    }

    /// Experience that would be sent: the override, else the driver's default
    pub fn effective_experience(&self) -> Option<u32> {
        self.experience_override
            .or_else(|| self.driver.map(|d| d.experience))
    }

    fn advance_to(&mut self, step: Step) {
        if step > self.step {
            self.step = step;
        }
    }

    pub fn select_season(&mut self, season: u16) -> Result<(), FormError> {
        if !is_supported_season(season) {
            return Err(FormError::UnknownSeason(season));
        }
        self.season = Some(season);
        self.advance_to(Step::DriverSelect);
        Ok(())
    }

    pub fn select_driver(&mut self, name: &str) -> Result<(), FormError> {
        let driver =
            find_driver(name).ok_or_else(|| FormError::UnknownDriver(name.to_string()))?;
        self.driver = Some(driver);
        self.advance_to(Step::CircuitSelect);
        Ok(())
    }

    pub fn select_race(&mut self, name: &str) -> Result<(), FormError> {
        let race = find_race(name).ok_or_else(|| FormError::UnknownRace(name.to_string()))?;
        self.race = Some(race);
        self.advance_to(Step::ReadyToSubmit);
        Ok(())
    }

    /// Set the experience override; zero counts as no override
    pub fn set_experience_override(&mut self, years: Option<u32>) {
        self.experience_override = years.filter(|&y| y > 0);
    }

    /// Set the override from raw text input
    pub fn set_experience_input(&mut self, input: &str) {
        self.experience_override = parse_experience(input);
    }

    /// Submit is allowed once everything is selected and nothing is pending
    pub fn can_submit(&self) -> bool {
        self.season.is_some()
            && self.driver.is_some()
            && self.race.is_some()
            && !self.is_loading()
    }

    /// Assemble the request from the current selections
    pub fn build_request(&self) -> Result<PredictionRequest, FormError> {
        let driver = self.driver.ok_or(FormError::NoDriverSelected)?;
        let season = self.season.ok_or(FormError::MissingSeason)?;
        let race = self.race.ok_or(FormError::MissingRace)?;

        Ok(PredictionRequest {
            season,
            team_encoded: driver.team_code,
            driver_name: driver.name.to_string(),
            race_name: race.name.to_string(),
            driver_experience: self.experience_override.unwrap_or(driver.experience),
        })
    }

    /// Clear the previous outcome and enter `Loading`
    ///
    /// Validation failures are stored as the error message and returned; the
    /// form stays out of `Loading` and no request should be sent.
    pub fn begin_submission(&mut self) -> Result<PredictionRequest, FormError> {
        self.status = RequestStatus::Idle;

        match self.build_request() {
            Ok(request) => {
                self.status = RequestStatus::Loading;
                Ok(request)
            }
            Err(e) => {
                tracing::warn!("Prediction not submitted: {}", e);
                self.status = RequestStatus::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Store the outcome of a submission and leave `Loading`
    pub fn complete_submission(&mut self, outcome: Result<PredictionResult, ClientError>) {
        self.status = match outcome {
            Ok(result) => {
                tracing::info!(
                    "Prediction received: P{} ({})",
                    result.predicted_position,
                    format_confidence(result.prediction_confidence)
                );
                RequestStatus::Success(result)
            }
            Err(e) => {
                tracing::warn!("Prediction failed: {}", e);
                RequestStatus::Error(e.to_string())
            }
        };
    }

    /// Validate, call the service once and store the outcome
    pub async fn submit<S>(&mut self, service: &S) -> &RequestStatus
    where
        S: PredictionService + ?Sized,
    {
        let request = match self.begin_submission() {
            Ok(request) => request,
            Err(_) => return &self.status,
        };

        let outcome = service.predict_position(&request).await;
        self.complete_submission(outcome);
        &self.status
    }

    /// Start over with an empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One-line summary of the current prediction for sharing
    pub fn share_text(&self) -> Option<String> {
        let result = self.prediction()?;
        let driver = self.driver?;
        let race = self.race?;
        let season = self.season?;

        Some(format!(
            "F1 Pulse Prediction: {} at {} {} - Predicted Position: P{} ({} confidence)",
            driver.name,
            race.name,
            season,
            result.predicted_position,
            format_confidence(result.prediction_confidence)
        ))
    }
}
