//! Platform API client
//!
//! Thin reqwest wrapper the probe suites share: base-URL joining,
//! bearer-token state, JSON verbs and transport-error classification.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::utils::errors::{MentorProbeError, ProbeError, Result};
use crate::utils::logging::log_api_error;

/// A decoded response from the platform API
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Parsed JSON body; `Null` for empty bodies, a plain string for
    /// non-JSON payloads (error pages, proxies)
    pub body: Value,
}

impl ApiResponse {
    /// Look up a top-level field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// Look up a top-level string field
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.body.get(name).and_then(Value::as_str)
    }

    /// Look up a top-level array field
    pub fn array_field(&self, name: &str) -> Option<&Vec<Value>> {
        self.body.get(name).and_then(Value::as_array)
    }
}

/// HTTP client for the platform API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(MentorProbeError::Http)?;

        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Set the bearer token attached to subsequent requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the bearer token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Currently held bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(MentorProbeError::UrlParse)
    }

    /// GET an endpoint
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.endpoint_url(path)?;
        self.execute(self.client.get(url), path).await
    }

    /// POST a JSON body to an endpoint
    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        let url = self.endpoint_url(path)?;
        self.execute(self.client.post(url).json(body), path).await
    }

    /// PUT a JSON body to an endpoint
    pub async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        let url = self.endpoint_url(path)?;
        self.execute(self.client.put(url).json(body), path).await
    }

    /// DELETE an endpoint
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        let url = self.endpoint_url(path)?;
        self.execute(self.client.delete(url), path).await
    }

    async fn execute(&self, builder: RequestBuilder, path: &str) -> Result<ApiResponse> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        debug!(endpoint = path, "Sending API request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = if e.is_timeout() {
                    ProbeError::Timeout
                } else if e.is_connect() {
                    ProbeError::ServiceUnavailable
                } else {
                    ProbeError::RequestFailed(e.to_string())
                };
                log_api_error(path, &err.to_string(), None);
                return Err(MentorProbeError::Probe(err));
            }
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| MentorProbeError::Probe(ProbeError::InvalidResponse(e.to_string())))?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        debug!(endpoint = path, status = %status, "API response received");

        Ok(ApiResponse { status, body })
    }
}

/// Assert an exact response status
pub fn expect_status(response: &ApiResponse, expected: StatusCode, endpoint: &str) -> Result<()> {
    if response.status != expected {
        return Err(MentorProbeError::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            expected: expected.as_u16(),
            actual: response.status.as_u16(),
        });
    }
    Ok(())
}
