//! Parsing of validator JSON responses.
//!
//! The HTML checker answers with a `messages` array; the CSS validator with a
//! nested `cssvalidation.result` object. Anything that does not decode into
//! the expected shape becomes [`ValidationResult::Empty`], which the
//! orchestrator treats as a transient hiccup and retries.

use std::fmt;

use serde::Deserialize;

use crate::target::ContentKind;

/// Category of an HTML checker message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Info,
    Other(String),
}

impl MessageKind {
    fn from_wire(kind: &str) -> Self {
        match kind {
            "error" => MessageKind::Error,
            "info" => MessageKind::Info,
            other => MessageKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Info => "info",
            MessageKind::Other(kind) => kind,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MessageKind::Error)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message reported by the HTML checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlMessage {
    pub kind: MessageKind,
    pub line: Option<u64>,
    pub text: String,
}

impl HtmlMessage {
    /// Everything after the kind prefix: `line N: text` or just `text`
    pub fn detail(&self) -> String {
        match self.line {
            Some(line) => format!("line {}: {}", line, self.text),
            None => self.text.clone(),
        }
    }
}

impl fmt::Display for HtmlMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail())
    }
}

/// Parsed validator response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Css {
        error_count: u64,
        warning_count: u64,
    },
    Html {
        messages: Vec<HtmlMessage>,
    },
    /// The body was empty, malformed, or not the expected shape
    Empty,
}

impl ValidationResult {
    /// Decode a response body for the given validator.
    pub fn parse(body: &str, kind: ContentKind) -> Self {
        match kind {
            ContentKind::Css => serde_json::from_str::<CssResponse>(body)
                .map(|response| ValidationResult::Css {
                    error_count: response.cssvalidation.result.errorcount,
                    warning_count: response.cssvalidation.result.warningcount,
                })
                .unwrap_or(ValidationResult::Empty),
            ContentKind::Html => serde_json::from_str::<HtmlResponse>(body)
                .map(|response| ValidationResult::Html {
                    messages: response
                        .messages
                        .into_iter()
                        .map(|message| HtmlMessage {
                            kind: MessageKind::from_wire(&message.kind),
                            line: message.last_line,
                            text: message.message,
                        })
                        .collect(),
                })
                .unwrap_or(ValidationResult::Empty),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ValidationResult::Empty)
    }

    /// (errors, warnings) this result contributes to the run tally
    pub fn counts(&self) -> (u64, u64) {
        match self {
            ValidationResult::Css {
                error_count,
                warning_count,
            } => (*error_count, *warning_count),
            ValidationResult::Html { messages } => {
                let errors = messages.iter().filter(|m| m.kind.is_error()).count() as u64;
                (errors, messages.len() as u64 - errors)
            }
            ValidationResult::Empty => (0, 0),
        }
    }
}

#[derive(Deserialize)]
struct CssResponse {
    cssvalidation: CssValidation,
}

#[derive(Deserialize)]
struct CssValidation {
    result: CssCounts,
}

#[derive(Deserialize)]
struct CssCounts {
    errorcount: u64,
    warningcount: u64,
}

#[derive(Deserialize)]
struct HtmlResponse {
    messages: Vec<RawMessage>,
}

#[derive(Deserialize)]
struct RawMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "lastLine", default)]
    last_line: Option<u64>,
    #[serde(default)]
    message: String,
}
