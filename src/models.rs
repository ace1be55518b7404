use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prediction request sent to `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub season: u16,
    pub team_encoded: u8,
    pub driver_name: String,
    pub race_name: String,
    pub driver_experience: u32,
}

/// Actual race outcome attached to predictions for historical seasons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalResult {
    pub position: Option<u8>,
    pub points: Option<f64>,
    pub driver: Option<String>,
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u16>,
}

/// Prediction returned by the service
///
/// Backends disagree on field casing, so the camelCase spellings are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(alias = "predictedPosition")]
    pub predicted_position: u8,
    #[serde(default, alias = "predictionConfidence")]
    pub prediction_confidence: f64,
    #[serde(default, alias = "isHistorical")]
    pub is_historical: bool,
    #[serde(default, alias = "historicalResult")]
    pub historical_result: Option<HistoricalResult>,

    // Echo fields, present on newer backends only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u16>,
    #[serde(default, alias = "teamName", skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, alias = "driverName", skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(default, alias = "raceName", skip_serializing_if = "Option::is_none")]
    pub race_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<f64>,
}

impl PredictionResult {
    pub fn new(predicted_position: u8, prediction_confidence: f64) -> Self {
        Self {
            predicted_position,
            prediction_confidence,
            is_historical: false,
            historical_result: None,
            request_id: None,
            season: None,
            team_name: None,
            driver_name: None,
            race_name: None,
            timestamp: None,
            processing_time_ms: None,
        }
    }

    /// Historical outcome, only when the result is flagged historical
    pub fn historical(&self) -> Option<&HistoricalResult> {
        if self.is_historical {
            self.historical_result.as_ref()
        } else {
            None
        }
    }
}

/// Standard `{success, message, data}` wrapper used by the GET endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// `GET /teams` payload: constructor name to team code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsPayload {
    pub teams: BTreeMap<String, u8>,
}

/// `GET /historical/{season}` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSeason {
    pub season: u16,
    #[serde(default)]
    pub results: Vec<HistoricalResult>,
}

/// `GET /health` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub timestamp: Option<String>,
    pub version: Option<String>,
    pub model_loaded: bool,
    pub historical_data_loaded: bool,
}

/// `GET /stats/summary` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionStats {
    pub total_predictions_today: u64,
    pub most_predicted_team: Option<String>,
    pub average_confidence: Option<f64>,
}
