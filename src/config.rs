use crate::cli::Cli;
use crate::error::{ConfigError, ConfigResult as Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HTML_VALIDATOR_URL: &str = "http://validator.w3.org/check";
pub const DEFAULT_CSS_VALIDATOR_URL: &str = "http://jigsaw.w3.org/css-validator/validator";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub endpoints: EndpointConfig,
    pub network: NetworkConfig,
    pub output: OutputConfig,
}

/// Validator service locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// HTML checker URL
    pub html: String,
    /// CSS validator URL
    pub css: String,
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// HTTP request timeout in seconds, transport default when unset
    pub timeout_seconds: Option<u64>,
    /// Pause after every validator call in milliseconds
    pub courtesy_delay_ms: u64,
    /// Submissions per target before it is marked failed
    pub max_attempts: u32,
    /// User agent string
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Echo requests and raw responses
    pub verbose: bool,
    /// Suppress progress and retry notices
    pub quiet: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            html: DEFAULT_HTML_VALIDATOR_URL.to_string(),
            css: DEFAULT_CSS_VALIDATOR_URL.to_string(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            courtesy_delay_ms: 2000,
            max_attempts: 2,
            user_agent: format!("w3c-validator/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl NetworkConfig {
    pub fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.courtesy_delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

const CONFIG_NAMES: [&str; 4] = [
    "w3c-validator.toml",
    "w3c-validator.json",
    ".w3c-validator.toml",
    ".w3c-validator.json",
];

/// Configuration manager for loading and merging configurations
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration with precedence: defaults -> file -> CLI
    pub async fn load_config(cli: &Cli) -> Result<Config> {
        let mut config = Config::default();

        if let Some(config_path) = &cli.config {
            config = Self::load_from_file(config_path).await?;
        } else if let Some(found_config) = Self::find_config_file().await? {
            config = found_config;
        }

        config = Self::merge_with_cli(config, cli);

        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Load configuration from a file (TOML or JSON)
    pub async fn load_from_file(path: &Path) -> Result<Config> {
        let content = tokio::fs::read_to_string(path).await?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => {
                // Try to parse as TOML first, then JSON
                if let Ok(config) = toml::from_str::<Config>(&content) {
                    Ok(config)
                } else {
                    Ok(serde_json::from_str(&content)?)
                }
            }
        }
    }

    /// Find configuration file in standard locations
    pub async fn find_config_file() -> Result<Option<Config>> {
        for path in Self::candidate_paths(Path::new("."), dirs::config_dir()) {
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                return Ok(Some(Self::load_from_file(&path).await?));
            }
        }
        Ok(None)
    }

    /// Config files looked up when `--config` is absent, in priority order
    pub fn candidate_paths(current_dir: &Path, user_config_dir: Option<PathBuf>) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = CONFIG_NAMES
            .iter()
            .map(|name| current_dir.join(name))
            .collect();

        if let Some(config_dir) = user_config_dir {
            let app_config_dir = config_dir.join("w3c-validator");
            paths.extend(CONFIG_NAMES.iter().map(|name| app_config_dir.join(name)));
        }

        paths
    }

    /// Merge CLI arguments with configuration (CLI takes precedence)
    pub fn merge_with_cli(mut config: Config, cli: &Cli) -> Config {
        if cli.verbose {
            config.output.verbose = true;
            config.output.quiet = false;
        }
        if cli.quiet {
            config.output.quiet = true;
            config.output.verbose = false;
        }

        if cli.timeout.is_some() {
            config.network.timeout_seconds = cli.timeout;
        }
        if let Some(delay) = cli.delay {
            config.network.courtesy_delay_ms = delay;
        }

        config
    }

    /// Validate configuration values
    pub fn validate_config(config: &Config) -> Result<()> {
        for (name, url) in [
            ("endpoints.html", &config.endpoints.html),
            ("endpoints.css", &config.endpoints.css),
        ] {
            if reqwest::Url::parse(url).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{} is not a valid URL: {}",
                    name, url
                )));
            }
        }

        if config.network.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        if config.network.max_attempts > 10 {
            return Err(ConfigError::Validation(
                "max_attempts cannot exceed 10".to_string(),
            ));
        }

        if config.network.timeout_seconds == Some(0) {
            return Err(ConfigError::Validation(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if config.output.verbose && config.output.quiet {
            return Err(ConfigError::Validation(
                "Cannot enable both verbose and quiet modes".to_string(),
            ));
        }

        Ok(())
    }
}
