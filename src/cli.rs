use clap::Parser;
use std::path::PathBuf;

/// Verbosity levels for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Only validation messages, failures and fatal errors
    Quiet,
    /// Progress and retry notices as well
    #[default]
    Normal,
    /// Request descriptions, raw responses and a final summary too
    Verbose,
}

impl VerbosityLevel {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Validate HTML and CSS files or URLs with the W3C validators
#[derive(Parser, Debug, Clone)]
#[command(name = "w3c-validator")]
#[command(about = "Validate HTML and CSS files or URLs using the W3C validation services")]
#[command(version)]
pub struct Cli {
    /// Files or http(s) URLs to validate; names ending in .css go to the CSS validator
    #[arg(value_name = "FILE|URL")]
    pub targets: Vec<String>,

    /// Echo requests and raw validator responses
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only report validation messages and failures
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (TOML or JSON)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout")]
    pub timeout: Option<u64>,

    /// Pause after each validator call in milliseconds
    #[arg(long = "delay")]
    pub delay: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        VerbosityLevel::from_flags(self.verbose, self.quiet)
    }

    /// One-line usage printed when no targets are given
    pub fn usage() -> String {
        "usage: w3c-validator [--verbose] FILE|URL...".to_string()
    }
}
