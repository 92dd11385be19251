//! HTTP Backend Implementation
//!
//! Backend for the email question-answering service's REST API.
//!
//! # Endpoints
//!
//! - `GET /health` - liveness; any 2xx means available
//! - `POST /query` - answer a question with cited sources

use std::time::Duration;

use async_trait::async_trait;

use super::traits::{BackendError, QaBackend, QueryRequest, QueryResponse};
use crate::config::ConductorConfig;
use crate::session::HealthOutcome;

/// HTTP client for the question-answering service
#[derive(Clone)]
pub struct HttpQaBackend {
    /// Service base URL, no trailing slash
    base_url: String,
    /// Timeout applied to the health probe
    health_timeout: Duration,
    /// HTTP client
    http_client: reqwest::Client,
}

impl HttpQaBackend {
    /// Create a new backend
    ///
    /// `request_timeout` of `None` leaves queries bounded only by the
    /// underlying transport.
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Option<Duration>,
        health_timeout: Duration,
    ) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            health_timeout,
            http_client,
        })
    }

    /// Create from `ConductorConfig`
    pub fn from_config(config: &ConductorConfig) -> Result<Self, BackendError> {
        let request_timeout = match config.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(
            config.base_url.clone(),
            request_timeout,
            Duration::from_secs(config.health_timeout_secs),
        )
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get health endpoint URL
    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Get query endpoint URL
    fn query_url(&self) -> String {
        format!("{}/query", self.base_url)
    }
}

#[async_trait]
impl QaBackend for HttpQaBackend {
    fn name(&self) -> &'static str {
        "HTTP"
    }

    async fn health_check(&self) -> HealthOutcome {
        let result = self
            .http_client
            .get(self.health_url())
            .timeout(self.health_timeout)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => HealthOutcome::available(),
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Health check returned unhealthy status");
                HealthOutcome::unavailable()
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %self.health_url(), "Health check failed");
                HealthOutcome::unavailable()
            }
        }
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
        let response = self
            .http_client
            .post(self.query_url())
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
    }
}
