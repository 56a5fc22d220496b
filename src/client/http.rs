use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::envelope::interpret_response;
use super::{ApiReply, ApiTransport, Session};
use crate::config::ApiConfig;
use crate::core::{AppError, Result};

/// Header carrying a per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// reqwest-backed client for the backend REST API
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - Base URL and timeout (from API_BASE_URL / API_TIMEOUT_SECS)
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ApiTransport for HttpApiClient {
    async fn call(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiReply> {
        let url = self.url(path);
        let request_id = Uuid::new_v4().to_string();

        debug!(
            method = %method,
            url = url.as_str(),
            request_id = request_id.as_str(),
            authenticated = session.is_authenticated(),
            "Sending API request"
        );

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, &request_id);

        if let Some(token) = session.bearer_token() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(
                method = %method,
                url = url.as_str(),
                request_id = request_id.as_str(),
                error = %e,
                "API request failed before a response was received"
            );
            AppError::network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let result = interpret_response(status, &bytes);
        if let Err(ref err) = result {
            warn!(
                method = %method,
                url = url.as_str(),
                request_id = request_id.as_str(),
                status,
                error = %err,
                "API request rejected"
            );
        }

        result
    }
}
