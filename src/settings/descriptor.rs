//! Setting descriptor types
//! Type definitions for declarative recorder configuration

use super::RecorderSettings;
use crate::constants::errors;
use crate::error::{ErrorType, RiftError};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(usize),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Integer setting with optional min/max bounds
    Integer {
        /// Minimum value (inclusive)
        min: Option<usize>,
        /// Maximum value (inclusive)
        max: Option<usize>,
    },
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation (out of range, etc.)
    ValidationError(String),
    /// Unknown option name
    UnknownOption(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
        }
    }
}

impl From<SettingError> for RiftError {
    fn from(err: SettingError) -> Self {
        match err {
            SettingError::ParseError(msg) => {
                RiftError::new(ErrorType::Parse, errors::SETTING_PARSE_ERROR, msg)
            }
            SettingError::ValidationError(msg) => {
                RiftError::new(ErrorType::Settings, errors::SETTING_VALIDATION_ERROR, msg)
            }
            SettingError::UnknownOption(name) => RiftError::new(
                ErrorType::Settings,
                errors::UNKNOWN_SETTING,
                format!("Unknown option: {name}"),
            ),
        }
    }
}

/// Setter function signature
///
/// Receives parsed and validated `SettingValue`, never raw strings.
pub type SettingSetter = fn(&mut RecorderSettings, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor: name, aliases, type, and setter function
#[derive(Debug, Clone)]
pub struct SettingDescriptor {
    /// Canonical setting name (e.g., "debug")
    pub name: &'static str,
    /// Short aliases (e.g., &["mcdebug"])
    pub aliases: &'static [&'static str],
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter,
}

impl SettingDescriptor {
    pub fn is_boolean(&self) -> bool {
        matches!(self.ty, SettingType::Boolean)
    }
}
