//! Diagnostic reporting.
//!
//! Every line the tool prints goes through a [`Reporter`], one line per event,
//! to the diagnostic stream. Tests hand it an in-memory buffer instead.

use std::io::{self, Write};

use crate::cli::VerbosityLevel;
use crate::error::ValidationError;
use crate::request::ValidationRequest;
use crate::response::HtmlMessage;
use crate::target::ValidationTarget;
use crate::validator::RunTally;

/// Diagnostic writer with configurable verbosity
pub struct Reporter<W: Write> {
    out: W,
    verbosity: VerbosityLevel,
    show_colors: bool,
}

impl Reporter<io::Stderr> {
    /// Reporter on stderr, colouring message kinds when attached to a terminal
    pub fn stderr(verbosity: VerbosityLevel) -> Self {
        Self {
            out: io::stderr(),
            verbosity,
            show_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbosity: VerbosityLevel) -> Self {
        Self {
            out,
            verbosity,
            show_colors: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        // Write errors are ignored.
        let _ = writeln!(self.out, "{}", text);
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.show_colors {
            format!("\x1b[{}m{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    pub fn report_progress(&mut self, target: &ValidationTarget) {
        if self.verbosity > VerbosityLevel::Quiet {
            self.line(&format!("validating: {} ...", target));
        }
    }

    pub fn report_retry(&mut self, target: &ValidationTarget) {
        if self.verbosity > VerbosityLevel::Quiet {
            self.line(&format!("retrying: {} ...", target));
        }
    }

    pub fn report_failed(&mut self, target: &ValidationTarget) {
        let label = self.colorize("failed:", "31");
        self.line(&format!("{} {}", label, target));
    }

    /// Non-zero CSS validator counts
    pub fn report_css_counts(&mut self, error_count: u64, warning_count: u64) {
        if error_count > 0 {
            let label = self.colorize("errors:", "31");
            self.line(&format!("{} {}", label, error_count));
        }
        if warning_count > 0 {
            let label = self.colorize("warnings:", "33");
            self.line(&format!("{} {}", label, warning_count));
        }
    }

    pub fn report_html_message(&mut self, message: &HtmlMessage) {
        let color = if message.kind.is_error() { "31" } else { "33" };
        let kind = self.colorize(message.kind.as_str(), color);
        self.line(&format!("{}: {}", kind, message.detail()));
    }

    /// Outgoing request description, verbose only
    pub fn trace_request(&mut self, request: &ValidationRequest) {
        if self.verbosity >= VerbosityLevel::Verbose {
            self.line(&request.to_string());
        }
    }

    /// Raw response body, verbose only
    pub fn trace_response(&mut self, body: &str) {
        if self.verbosity >= VerbosityLevel::Verbose {
            self.line(body);
        }
    }

    /// Fatal error that stops the run
    pub fn report_fatal(&mut self, error: &ValidationError) {
        let label = self.colorize("error:", "31");
        self.line(&format!("{} {}", label, error));
    }

    pub fn report_usage(&mut self, usage: &str) {
        self.line(usage);
    }

    /// Totals for the run, verbose only
    pub fn report_summary(&mut self, tally: &RunTally) {
        if self.verbosity >= VerbosityLevel::Verbose {
            self.line(&format!(
                "summary: {} target{}, {} failed, {} error{}, {} warning{}",
                tally.targets,
                plural(tally.targets as u64),
                tally.failed,
                tally.errors,
                plural(tally.errors),
                tally.warnings,
                plural(tally.warnings)
            ));
        }
    }
}

fn plural(count: u64) -> &'static str {
    if count == 1 { "" } else { "s" }
}
