//! Centralized error handling for rift-mc
//! Defines the error type, severity levels, and error codes

use crate::constants::errors;
use std::fmt;

pub mod manager;

pub use manager::ErrorManager;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - something might be wrong but recording can continue
    Warning,
    /// Standard error - the current command is not recorded
    Error,
    /// Critical error - recorder state can no longer be trusted
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Append against a slot holding a non-sequence value
    TypeMismatch,
    /// Key vector that cannot be parsed (bad notation, bad count prefix)
    MalformedKeyVector,
    /// Text parsing errors (mode names, setting lines)
    Parse,
    /// Configuration or settings errors
    Settings,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch => write!(f, "TypeMismatch"),
            Self::MalformedKeyVector => write!(f, "MalformedKeyVector"),
            Self::Parse => write!(f, "Parse"),
            Self::Settings => write!(f, "Settings"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error in rift-mc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiftError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "TYPE_MISMATCH")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl RiftError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Append to `slot` whose current value is not a key vector
    pub fn type_mismatch(slot: impl fmt::Display, found: impl fmt::Display) -> Self {
        Self::new(
            ErrorType::TypeMismatch,
            errors::TYPE_MISMATCH,
            format!("slot '{slot}' holds {found}, expected a key vector"),
        )
    }

    /// Key vector that could not be parsed
    pub fn malformed_keys(message: impl Into<String>) -> Self {
        Self::new(
            ErrorType::MalformedKeyVector,
            errors::MALFORMED_KEY_VECTOR,
            message,
        )
    }

    /// Prefix the message with the command the error was raised for
    #[must_use]
    pub fn in_command(mut self, command: &str) -> Self {
        self.message = format!("{command}: {}", self.message);
        self
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for RiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for RiftError {}

impl From<String> for RiftError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, errors::GENERIC_ERROR, msg)
    }
}

impl From<&str> for RiftError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, errors::GENERIC_ERROR, msg)
    }
}

impl From<std::io::Error> for RiftError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Settings, errors::IO_ERROR, err.to_string())
    }
}

/// Result alias for rift-mc operations
pub type Result<T> = std::result::Result<T, RiftError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
