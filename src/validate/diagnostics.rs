//! Diagnostic types reported by validators.

use std::fmt;

use smol_str::SmolStr;

use crate::node::Node;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A validation message, optionally located at one statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: Option<&'static str>,
    /// The diagnostic message.
    pub message: String,
    /// Origin tag of the document the statement belongs to.
    pub source: Option<SmolStr>,
    /// Keyword of the offending statement.
    pub keyword: Option<SmolStr>,
    /// Argument of the offending statement.
    pub argument: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            source: None,
            keyword: None,
            argument: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Locate the diagnostic at `node`.
    pub fn at(mut self, node: &Node) -> Self {
        self.source = Some(node.source());
        self.keyword = Some(node.keyword());
        self.argument = node.argument();
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{source}: ")?;
        }
        write!(f, "{}", self.severity.as_str())?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        match (&self.keyword, &self.argument) {
            (Some(keyword), Some(argument)) => write!(f, " (at `{keyword} {argument}`)"),
            (Some(keyword), None) => write!(f, " (at `{keyword}`)"),
            _ => Ok(()),
        }
    }
}

/// Diagnostic codes of the structural validator.
///
/// - **E0001-E0099**: errors
/// - **W0001-W0099**: warnings
pub mod codes {
    /// Document root without a name.
    pub const MISSING_ROOT_NAME: &str = "E0001";
    /// `module` without `namespace`.
    pub const MISSING_NAMESPACE: &str = "E0002";
    /// `module` without `prefix`.
    pub const MISSING_PREFIX: &str = "E0003";
    /// `submodule` without `belongs-to`.
    pub const MISSING_BELONGS_TO: &str = "E0004";
    /// Extension keyword with an undeclared prefix.
    pub const UNKNOWN_PREFIX: &str = "E0005";

    /// Import whose prefix is never referenced.
    pub const UNUSED_IMPORT: &str = "W0001";
}
