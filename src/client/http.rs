//! HTTP client for the prediction service

use crate::error::{validate_confidence, validate_position, ClientError};
use crate::models::{
    ApiEnvelope, HealthStatus, HistoricalSeason, PredictionRequest, PredictionResult,
    PredictionStats, TeamsPayload,
};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

/// Base URL of the prediction service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL, endpoint paths are appended to it
    pub base_url: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Bearer token sent with every request when set
    pub auth_token: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// Honour HTTP(S)_PROXY environment variables
    pub use_env_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            auth_token: None,
            user_agent: format!("f1pulse/{}", env!("CARGO_PKG_VERSION")),
            use_env_proxy: true,
        }
    }
}

/// Prediction service client
///
/// Every operation performs exactly one HTTP call. There are no retries.
pub struct PredictionClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build URL for an endpoint path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.auth_token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and return the body of a 2xx response
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<String, ClientError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", url, e);
            ClientError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// GET an endpoint and unwrap the `data` field of its envelope
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::info!("GET {}", url);

        let body = self.send(self.client.get(&url), &url).await?;
        let envelope: ApiEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Malformed response from {}: {}", url, e);
            ClientError::Decode(e)
        })?;

        Ok(envelope.data)
    }

    /// Request a finishing position prediction
    pub async fn predict_position(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError> {
        let url = self.url("predict");
        tracing::info!(
            "POST {}: {} at {} {}",
            url,
            request.driver_name,
            request.race_name,
            request.season
        );

        let body = self.send(self.client.post(&url).json(request), &url).await?;
        let result: PredictionResult = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Malformed prediction from {}: {}", url, e);
            ClientError::Decode(e)
        })?;

        if !validate_position(result.predicted_position) {
            tracing::warn!(
                "Predicted position {} outside 1-20",
                result.predicted_position
            );
        }
        if !validate_confidence(result.prediction_confidence) {
            tracing::warn!(
                "Prediction confidence {} outside 0-1",
                result.prediction_confidence
            );
        }
        tracing::debug!("Prediction response: {:?}", result);

        Ok(result)
    }

    /// Fetch the constructor name to team code mapping
    pub async fn get_teams(&self) -> Result<BTreeMap<String, u8>, ClientError> {
        let payload: TeamsPayload = self.get_data("teams").await?;
        Ok(payload.teams)
    }

    /// Fetch recorded results for a season
    pub async fn get_historical_data(&self, season: u16) -> Result<HistoricalSeason, ClientError> {
        self.get_data(&format!("historical/{}", season)).await
    }

    pub async fn get_health_status(&self) -> Result<HealthStatus, ClientError> {
        self.get_data("health").await
    }

    pub async fn get_stats_summary(&self) -> Result<PredictionStats, ClientError> {
        self.get_data("stats/summary").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::stub::{refused_base_url, serve_json};
    use serde_json::json;

    fn client_for(base_url: &str) -> PredictionClient {
        PredictionClient::new(ClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
            use_env_proxy: false,
            ..Default::default()
        })
        .unwrap()
    }

    fn monaco_request() -> PredictionRequest {
        PredictionRequest {
            season: 2024,
            team_encoded: 0,
            driver_name: "Max Verstappen".to_string(),
            race_name: "Monaco Grand Prix".to_string(),
            driver_experience: 10,
        }
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert!(config.timeout_secs.is_none());
        assert!(config.auth_token.is_none());
        assert!(config.user_agent.starts_with("f1pulse/"));
    }

    #[test]
    fn test_url_joining() {
        let client = client_for("http://localhost:8000/");
        assert_eq!(client.url("predict"), "http://localhost:8000/predict");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");

        let client = client_for("http://localhost:8080/api");
        assert_eq!(
            client.url("historical/2023"),
            "http://localhost:8080/api/historical/2023"
        );
    }

    #[tokio::test]
    async fn test_predict_position_posts_request() {
        let server = serve_json(
            200,
            r#"{"predicted_position": 3, "prediction_confidence": 0.82}"#,
        )
        .await;
        let client = client_for(&server.base_url);

        let result = client.predict_position(&monaco_request()).await.unwrap();
        assert_eq!(result.predicted_position, 3);
        assert!((result.prediction_confidence - 0.82).abs() < 1e-9);

        let captured = server.request().await;
        assert_eq!(captured.method, "POST");
        assert_eq!(captured.path, "/predict");
        assert_eq!(
            captured.header("content-type").as_deref(),
            Some("application/json")
        );
        let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(
            body,
            json!({
                "season": 2024,
                "team_encoded": 0,
                "driver_name": "Max Verstappen",
                "race_name": "Monaco Grand Prix",
                "driver_experience": 10
            })
        );
        assert!(captured.header("authorization").is_none());
    }

    #[tokio::test]
    async fn test_predict_position_camel_case_response() {
        let server = serve_json(
            200,
            r#"{"predictedPosition": 9, "predictionConfidence": 0.35}"#,
        )
        .await;
        let client = client_for(&server.base_url);

        let result = client.predict_position(&monaco_request()).await.unwrap();
        assert_eq!(result.predicted_position, 9);
    }

    #[tokio::test]
    async fn test_predict_position_http_error() {
        let server = serve_json(500, r#"{"detail": "Prediction failed"}"#).await;
        let client = client_for(&server.base_url);

        let err = client.predict_position(&monaco_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed { status: 500 }));
        assert!(err.is_request_failure());
    }

    #[tokio::test]
    async fn test_predict_position_malformed_body() {
        let server = serve_json(200, "not json").await;
        let client = client_for(&server.base_url);

        let err = client.predict_position(&monaco_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let base_url = refused_base_url().await;
        let client = client_for(&base_url);

        let err = client.predict_position(&monaco_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.is_request_failure());
    }

    #[tokio::test]
    async fn test_bearer_token() {
        let server = serve_json(200, r#"{"data": {"model_loaded": true}}"#).await;
        let client = PredictionClient::new(ClientConfig {
            base_url: server.base_url.clone(),
            auth_token: Some("demo-token".to_string()),
            use_env_proxy: false,
            ..Default::default()
        })
        .unwrap();

        client.get_health_status().await.unwrap();
        let captured = server.request().await;
        assert_eq!(
            captured.header("authorization").as_deref(),
            Some("Bearer demo-token")
        );
    }

    #[tokio::test]
    async fn test_get_teams() {
        let server = serve_json(
            200,
            r#"{"success": true, "message": "Teams retrieved successfully",
                "data": {"teams": {"Red Bull Racing": 0, "Ferrari": 2}}}"#,
        )
        .await;
        let client = client_for(&server.base_url);

        let teams = client.get_teams().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams.get("Red Bull Racing"), Some(&0));

        let captured = server.request().await;
        assert_eq!(captured.method, "GET");
        assert_eq!(captured.path, "/teams");
    }

    #[tokio::test]
    async fn test_get_historical_data() {
        let server = serve_json(
            200,
            r#"{"data": {"season": 2023, "results": [
                {"position": 1, "points": 25.0, "driver": "Max Verstappen", "team": "Red Bull Racing"}
            ]}}"#,
        )
        .await;
        let client = client_for(&server.base_url);

        let history = client.get_historical_data(2023).await.unwrap();
        assert_eq!(history.season, 2023);
        assert_eq!(history.results.len(), 1);
        assert_eq!(history.results[0].position, Some(1));

        assert_eq!(server.request().await.path, "/historical/2023");
    }

    #[tokio::test]
    async fn test_get_health_status() {
        let server = serve_json(
            200,
            r#"{"success": true, "message": "Service is healthy", "data": {
                "timestamp": "2024-05-01T12:00:00", "version": "3.0.0",
                "model_loaded": true, "historical_data_loaded": false}}"#,
        )
        .await;
        let client = client_for(&server.base_url);

        let health = client.get_health_status().await.unwrap();
        assert_eq!(health.version.as_deref(), Some("3.0.0"));
        assert!(health.model_loaded);
        assert!(!health.historical_data_loaded);
    }

    #[tokio::test]
    async fn test_get_stats_summary() {
        let server = serve_json(
            200,
            r#"{"data": {"total_predictions_today": 0,
                "most_predicted_team": "Red Bull Racing", "average_confidence": 0.75}}"#,
        )
        .await;
        let client = client_for(&server.base_url);

        let stats = client.get_stats_summary().await.unwrap();
        assert_eq!(stats.most_predicted_team.as_deref(), Some("Red Bull Racing"));
        assert_eq!(server.request().await.path, "/stats/summary");
    }

    #[tokio::test]
    async fn test_get_without_data_field_is_decode_error() {
        let server = serve_json(200, r#"{"success": true}"#).await;
        let client = client_for(&server.base_url);

        let err = client.get_health_status().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_http_error() {
        let server = serve_json(404, r#"{"detail": "Not Found"}"#).await;
        let client = client_for(&server.base_url);

        let err = client.get_historical_data(1990).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed { status: 404 }));
    }
}
