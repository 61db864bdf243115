//! Validation targets: a file path or URL named on the command line.

use std::fmt;
use std::path::Path;

const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Which validator service a target is submitted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Css,
}

impl ContentKind {
    /// MIME type declared for uploaded files
    pub fn mime_type(self) -> &'static str {
        match self {
            ContentKind::Html => "text/html",
            ContentKind::Css => "text/css",
        }
    }

    /// Multipart field name the validator expects for uploads
    pub fn upload_field(self) -> &'static str {
        match self {
            ContentKind::Html => "uploaded_file",
            ContentKind::Css => "file",
        }
    }
}

/// A single file path or URL to validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationTarget {
    identifier: String,
}

impl ValidationTarget {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.identifier
    }

    /// Remote targets are fetched by the validator itself.
    pub fn is_remote(&self) -> bool {
        REMOTE_SCHEMES
            .iter()
            .any(|scheme| self.identifier.starts_with(scheme))
    }

    pub fn is_css(&self) -> bool {
        self.identifier.ends_with(".css")
    }

    pub fn content_kind(&self) -> ContentKind {
        if self.is_css() {
            ContentKind::Css
        } else {
            ContentKind::Html
        }
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.identifier)
    }
}

impl fmt::Display for ValidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

impl From<&str> for ValidationTarget {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for ValidationTarget {
    fn from(identifier: String) -> Self {
        Self::new(identifier)
    }
}
