use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use w3c_validator::{
    EndpointConfig, Reporter, Validator, ValidatorSettings, ValidatorTransport, VerbosityLevel,
};

pub const HTML_ONE_ERROR: &str =
    r#"{"messages": [{"type":"error","lastLine":10,"message":"bad tag"}]}"#;
pub const HTML_CLEAN: &str = r#"{"messages": []}"#;
pub const CSS_THREE_WARNINGS: &str =
    r#"{"cssvalidation":{"result":{"errorcount":0,"warningcount":3}}}"#;
pub const CSS_TWO_ERRORS_ONE_WARNING: &str =
    r#"{"cssvalidation":{"result":{"errorcount":2,"warningcount":1}}}"#;

pub const SIMPLE_HTML: &str = "<!DOCTYPE html><html><head><title>t</title></head><body><blink>x</blink></body></html>";
pub const SIMPLE_CSS: &str = "body { colr: red; }";

/// Settings with no courtesy delay so tests run fast
pub fn fast_settings() -> ValidatorSettings {
    ValidatorSettings {
        courtesy_delay: Duration::ZERO,
        ..ValidatorSettings::default()
    }
}

/// Settings pointing both validators at a local mock server
pub fn mock_server_settings(base_url: &str) -> ValidatorSettings {
    ValidatorSettings {
        endpoints: EndpointConfig {
            html: format!("{}/check", base_url),
            css: format!("{}/css-validator/validator", base_url),
        },
        ..fast_settings()
    }
}

pub fn capture_validator<T: ValidatorTransport>(
    transport: T,
    settings: ValidatorSettings,
) -> Validator<T, Vec<u8>> {
    Validator::new(
        transport,
        Reporter::new(Vec::new(), VerbosityLevel::Normal),
        settings,
    )
}

/// Diagnostic output captured by a validator
pub fn captured_output<T: ValidatorTransport>(validator: Validator<T, Vec<u8>>) -> String {
    String::from_utf8(validator.into_reporter().into_inner()).unwrap()
}

/// Temporary directory holding documents to upload
pub struct TestDocuments {
    pub dir: TempDir,
}

impl TestDocuments {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn html(&self, name: &str) -> String {
        self.write(name, SIMPLE_HTML).to_string_lossy().into_owned()
    }

    pub fn css(&self, name: &str) -> String {
        self.write(name, SIMPLE_CSS).to_string_lossy().into_owned()
    }
}
