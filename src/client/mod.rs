//! Prediction service client
//!
//! Thin typed wrapper over the prediction service's HTTP API:
//! `POST /predict`, `GET /teams`, `GET /historical/{season}`, `GET /health`
//! and `GET /stats/summary`.
//!
//! # Example
//!
//! ```no_run
//! use f1pulse::client::{ClientConfig, PredictionClient};
//! use f1pulse::models::PredictionRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PredictionClient::new(ClientConfig::default())?;
//!
//!     let request = PredictionRequest {
//!         season: 2024,
//!         team_encoded: 0,
//!         driver_name: "Max Verstappen".to_string(),
//!         race_name: "Monaco Grand Prix".to_string(),
//!         driver_experience: 10,
//!     };
//!     let result = client.predict_position(&request).await?;
//!     println!("Predicted P{}", result.predicted_position);
//!
//!     Ok(())
//! }
//! ```

mod http;
#[cfg(test)]
pub(crate) mod stub;

pub use http::{ClientConfig, PredictionClient, DEFAULT_BASE_URL};
