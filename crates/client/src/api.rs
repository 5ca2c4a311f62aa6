use async_trait::async_trait;
use booksum_common::{ErrorResponse, SummaryRequest, SummaryResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Failures seen by the form
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Endpoint unreachable or the connection dropped
    #[error("Could not reach the server: {0}")]
    Network(String),

    /// Non-2xx status; `message` comes from the server when it sent one
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xx status but the body was not `{ "summary": ... }`
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// 2xx status with an empty summary
    #[error("The server returned an empty summary")]
    EmptySummary,
}

/// Transport used by the form to reach the summary endpoint
#[async_trait]
pub trait SummaryApi: Send + Sync {
    /// Send one request; implementations must not retry
    async fn request_summary(&self, request: &SummaryRequest) -> Result<String, ClientError>;
}

/// reqwest-backed transport posting to `{base_url}/summary-endpoint`
#[derive(Debug, Clone)]
pub struct HttpSummaryApi {
    endpoint: String,
    client: Client,
}

impl HttpSummaryApi {
    /// Create transport for a server base URL such as `http://127.0.0.1:8080`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}/summary-endpoint", base_url.trim_end_matches('/')),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryApi for HttpSummaryApi {
    async fn request_summary(&self, request: &SummaryRequest) -> Result<String, ClientError> {
        debug!("POST {}", self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Map an endpoint response onto the form's outcome
pub fn interpret_response(status: u16, body: &[u8]) -> Result<String, ClientError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .map(|e| e.message)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(ClientError::Server { status, message });
    }

    let parsed: SummaryResponse = serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

    if parsed.summary.trim().is_empty() {
        return Err(ClientError::EmptySummary);
    }

    Ok(parsed.summary)
}
