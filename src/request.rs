//! Request construction for the W3C validator endpoints.
//!
//! Remote targets are submitted as a GET with a `uri` query parameter so the
//! validator fetches the document itself. Local files are uploaded as
//! multipart form data under the field name each validator expects.

use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

use crate::config::EndpointConfig;
use crate::error::{Result, ValidationError};
use crate::target::{ContentKind, ValidationTarget};

/// How the target travels to the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestShape {
    /// GET with the target in the `uri` query parameter
    Query,
    /// Multipart POST uploading the file contents
    Upload {
        field: &'static str,
        path: PathBuf,
        mime_type: &'static str,
    },
}

/// A fully resolved validator submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub endpoint: Url,
    pub kind: ContentKind,
    pub shape: RequestShape,
    /// Parameters sent alongside the target, in order
    pub params: Vec<(&'static str, String)>,
}

impl ValidationRequest {
    /// Build the request for a target against the configured endpoints.
    pub fn for_target(target: &ValidationTarget, endpoints: &EndpointConfig) -> Result<Self> {
        let kind = target.content_kind();
        let endpoint_str = match kind {
            ContentKind::Html => &endpoints.html,
            ContentKind::Css => &endpoints.css,
        };
        let endpoint = Url::parse(endpoint_str).map_err(|e| ValidationError::InvalidEndpoint {
            url: endpoint_str.clone(),
            details: e.to_string(),
        })?;

        let mut params = Vec::with_capacity(3);
        let shape = if target.is_remote() {
            params.push(("uri", target.as_str().to_string()));
            RequestShape::Query
        } else {
            RequestShape::Upload {
                field: kind.upload_field(),
                path: target.path().to_path_buf(),
                mime_type: kind.mime_type(),
            }
        };

        params.push(("output", "json".to_string()));
        if kind == ContentKind::Css {
            params.push(("warning", "0".to_string()));
        }

        Ok(Self {
            endpoint,
            kind,
            shape,
            params,
        })
    }

    pub fn is_upload(&self) -> bool {
        matches!(self.shape, RequestShape::Upload { .. })
    }

    /// Endpoint with the parameters percent-encoded into the query string.
    /// Only meaningful for query-shaped requests; uploads carry them in the form.
    pub fn query_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .extend_pairs(self.params.iter().map(|(k, v)| (*k, v.as_str())));
        url
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Percent-encode a value the way it appears in a form or query string.
pub fn encode_value(value: &str) -> String {
    Url::parse_with_params("http://localhost/", &[("v", value)])
        .ok()
        .and_then(|url| url.query().and_then(|q| q.strip_prefix("v=")).map(str::to_string))
        .unwrap_or_default()
}

impl fmt::Display for ValidationRequest {
    /// Human-readable description used in verbose traces and transport errors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            RequestShape::Query => write!(f, "GET {}", self.query_url()),
            RequestShape::Upload {
                field,
                path,
                mime_type,
            } => {
                write!(
                    f,
                    "POST {} -F {}=@{};type={}",
                    self.endpoint,
                    field,
                    encode_value(&path.to_string_lossy()),
                    mime_type
                )?;
                for (key, value) in &self.params {
                    write!(f, " -F {}={}", key, encode_value(value))?;
                }
                Ok(())
            }
        }
    }
}
