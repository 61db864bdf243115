//! # w3c-validator Library
//!
//! Validate HTML and CSS documents, local files or URLs, by submitting them to the
//! W3C validation services and tallying the reported errors and warnings.

pub mod cli;
pub mod config;
pub mod error;
pub mod http_client;
pub mod reporter;
pub mod request;
pub mod response;
pub mod target;
pub mod validator;

pub use cli::{Cli, VerbosityLevel};
pub use config::{Config, ConfigManager, EndpointConfig, NetworkConfig, OutputConfig};
pub use error::{ConfigError, ValidationError};
pub use http_client::{HttpClientConfig, ValidatorClient, ValidatorTransport};
pub use reporter::Reporter;
pub use request::{RequestShape, ValidationRequest};
pub use response::{HtmlMessage, MessageKind, ValidationResult};
pub use target::{ContentKind, ValidationTarget};
pub use validator::{RunTally, TargetOutcome, Validator, ValidatorSettings};
