//! F1 Pulse - F1 race position prediction client
//!
//! This library provides:
//! - Driver, team, race and season reference data
//! - A typed HTTP client for the external prediction service
//! - A step-driven form controller that builds and submits prediction requests
//! - Terminal rendering of selection grids and prediction results
//!
//! # Example
//!
//! ```no_run
//! use f1pulse::client::{ClientConfig, PredictionClient};
//! use f1pulse::form::FormController;
//! use f1pulse::render;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PredictionClient::new(ClientConfig::default())?;
//!
//!     let mut form = FormController::new();
//!     form.select_season(2024)?;
//!     form.select_driver("Max Verstappen")?;
//!     form.select_race("Monaco Grand Prix")?;
//!
//!     form.submit(&client).await;
//!     println!("{}", render::status_panel(&form));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod data;
pub mod error;
pub mod form;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use client::{ClientConfig, PredictionClient};
pub use data::{Driver, Race, SeasonKind};
pub use error::{ClientError, FormError};
pub use form::{FormController, PredictionService, RequestStatus, Step};
pub use models::{HistoricalResult, PredictionRequest, PredictionResult};
