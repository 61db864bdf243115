use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::time::Duration;

use crate::config::NetworkConfig;
use crate::error::{Result, ValidationError};
use crate::request::{RequestShape, ValidationRequest};

/// Submits a validation request and returns the raw response body.
///
/// Any failure of the submission itself (connection, unreadable upload,
/// non-success status) is an error. Interpreting the body is left to the caller.
pub trait ValidatorTransport {
    fn submit(&self, request: &ValidationRequest) -> impl Future<Output = Result<String>>;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, transport default when `None`
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("w3c-validator/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&NetworkConfig> for HttpClientConfig {
    fn from(network: &NetworkConfig) -> Self {
        Self {
            timeout: network.timeout(),
            user_agent: network.user_agent.clone(),
        }
    }
}

/// reqwest-backed transport talking to the W3C services
pub struct ValidatorClient {
    client: Client,
    config: HttpClientConfig,
}

impl ValidatorClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ValidationError::from)?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    async fn build_form(&self, request: &ValidationRequest) -> Result<Form> {
        let mut form = Form::new();

        if let RequestShape::Upload {
            field,
            path,
            mime_type,
        } = &request.shape
        {
            let contents = tokio::fs::read(path).await.map_err(|source| {
                ValidationError::UnreadableTarget {
                    path: path.clone(),
                    source,
                }
            })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            let part = Part::bytes(contents)
                .file_name(file_name)
                .mime_str(mime_type)
                .map_err(|source| ValidationError::Transport {
                    request: request.to_string(),
                    source,
                })?;
            form = form.part(*field, part);
        }

        for (key, value) in &request.params {
            form = form.text(*key, value.clone());
        }

        Ok(form)
    }
}

impl ValidatorTransport for ValidatorClient {
    async fn submit(&self, request: &ValidationRequest) -> Result<String> {
        let builder = match &request.shape {
            RequestShape::Query => self
                .client
                .get(request.endpoint.clone())
                .query(&request.params),
            RequestShape::Upload { .. } => self
                .client
                .post(request.endpoint.clone())
                .multipart(self.build_form(request).await?),
        };

        let transport_error = |source| ValidationError::Transport {
            request: request.to_string(),
            source,
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ValidationError::HttpStatus {
                request: request.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport_error)
    }
}
