//! Editor mode tags

use crate::error::{ErrorType, RiftError};
use std::fmt;
use std::str::FromStr;

/// Mode the host editor is in at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Insert mode (text editing)
    Insert,
    /// Motion mode (read-only buffers where only motions apply)
    Motion,
    /// Visual selection
    Visual,
    /// Normal mode (command mode)
    Normal,
    /// Replace mode (`R`)
    Replace,
    /// Operator pending mode (e.g. after pressing 'd')
    Operator,
    /// Emacs editing mode, never recorded
    Emacs,
}

impl Mode {
    /// All mode tags, in declaration order
    pub const ALL: [Mode; 7] = [
        Mode::Insert,
        Mode::Motion,
        Mode::Visual,
        Mode::Normal,
        Mode::Replace,
        Mode::Operator,
        Mode::Emacs,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Insert => "insert",
            Mode::Motion => "motion",
            Mode::Visual => "visual",
            Mode::Normal => "normal",
            Mode::Replace => "replace",
            Mode::Operator => "operator",
            Mode::Emacs => "emacs",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RiftError::new(ErrorType::Parse, "UNKNOWN_MODE", format!("Unknown mode: {s}"))
            })
    }
}
