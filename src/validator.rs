//! Validation Orchestrator
//!
//! Targets are submitted one at a time, in input order, to the shared public
//! W3C services:
//! - **Request shaping**: remote targets go by `uri`, local files are uploaded
//! - **Courtesy delay**: a fixed pause after every completed validator call
//! - **Soft retries**: an unparseable response is retried up to `max_attempts`
//! - **Fatal transport errors**: never retried, they end the run
//!
//! The error/warning tally is a plain [`RunTally`] returned from [`Validator::run_all`].

use std::io::Write;
use std::time::Duration;

use crate::config::{Config, EndpointConfig};
use crate::error::Result;
use crate::http_client::ValidatorTransport;
use crate::reporter::Reporter;
use crate::request::ValidationRequest;
use crate::response::ValidationResult;
use crate::target::ValidationTarget;

/// Orchestrator settings
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorSettings {
    pub endpoints: EndpointConfig,
    /// Pause after every validator call
    pub courtesy_delay: Duration,
    /// Submissions per target before it is marked failed
    pub max_attempts: u32,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ValidatorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            endpoints: config.endpoints.clone(),
            courtesy_delay: config.network.courtesy_delay(),
            max_attempts: config.network.max_attempts,
        }
    }
}

/// Outcome for one target after retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    Validated(ValidationResult),
    /// Every attempt returned an unparseable response
    Failed,
}

/// Running totals for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub errors: u64,
    pub warnings: u64,
    /// Targets processed
    pub targets: usize,
    /// Targets that exhausted their attempts
    pub failed: usize,
}

impl RunTally {
    pub fn record(&mut self, result: &ValidationResult) {
        let (errors, warnings) = result.counts();
        self.errors = self.errors.saturating_add(errors);
        self.warnings = self.warnings.saturating_add(warnings);
        self.targets = self.targets.saturating_add(1);
    }

    pub fn record_failure(&mut self) {
        self.errors = self.errors.saturating_add(1);
        self.failed = self.failed.saturating_add(1);
        self.targets = self.targets.saturating_add(1);
    }

    /// Warnings never fail a run.
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Process exit status for the run
    pub fn exit_status(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Sequential validation engine over a transport
pub struct Validator<T: ValidatorTransport, W: Write> {
    transport: T,
    reporter: Reporter<W>,
    settings: ValidatorSettings,
}

impl<T: ValidatorTransport, W: Write> Validator<T, W> {
    pub fn new(transport: T, reporter: Reporter<W>, settings: ValidatorSettings) -> Self {
        Self {
            transport,
            reporter,
            settings,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Submit one target once and parse the response.
    ///
    /// An unparseable body yields [`ValidationResult::Empty`]; transport
    /// failures are returned as errors before the courtesy delay.
    pub async fn validate(&mut self, target: &ValidationTarget) -> Result<ValidationResult> {
        let request = ValidationRequest::for_target(target, &self.settings.endpoints)?;
        self.reporter.trace_request(&request);

        let body = self.transport.submit(&request).await?;
        self.reporter.trace_response(&body);

        let result = ValidationResult::parse(&body, request.kind);

        if !self.settings.courtesy_delay.is_zero() {
            tokio::time::sleep(self.settings.courtesy_delay).await;
        }

        Ok(result)
    }

    /// Validate a target, retrying immediately on an unparseable response.
    pub async fn validate_with_retry(&mut self, target: &ValidationTarget) -> Result<TargetOutcome> {
        let attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=attempts {
            let result = self.validate(target).await?;
            if !result.is_empty() {
                return Ok(TargetOutcome::Validated(result));
            }
            if attempt < attempts {
                self.reporter.report_retry(target);
            }
        }

        Ok(TargetOutcome::Failed)
    }

    /// Validate every target in order and return the tally.
    ///
    /// Stops at the first transport failure.
    pub async fn run_all<S: AsRef<str>>(&mut self, targets: &[S]) -> Result<RunTally> {
        let mut tally = RunTally::default();

        for identifier in targets {
            let target = ValidationTarget::new(identifier.as_ref());
            self.reporter.report_progress(&target);

            match self.validate_with_retry(&target).await? {
                TargetOutcome::Failed => {
                    tally.record_failure();
                    self.reporter.report_failed(&target);
                }
                TargetOutcome::Validated(result) => {
                    self.report_result(&result);
                    tally.record(&result);
                }
            }
        }

        self.reporter.report_summary(&tally);
        Ok(tally)
    }

    fn report_result(&mut self, result: &ValidationResult) {
        match result {
            ValidationResult::Css {
                error_count,
                warning_count,
            } => self.reporter.report_css_counts(*error_count, *warning_count),
            ValidationResult::Html { messages } => {
                for message in messages {
                    self.reporter.report_html_message(message);
                }
            }
            ValidationResult::Empty => {}
        }
    }
}
