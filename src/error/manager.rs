//! Error Manager
//! In-process error channel: keeps recent errors and logs each one

use crate::error::{ErrorSeverity, RiftError};
use std::collections::VecDeque;

/// Number of errors kept before the oldest is dropped
const DEFAULT_CAPACITY: usize = 64;

/// Collects reported errors and forwards them to `tracing`
pub struct ErrorManager {
    errors: VecDeque<RiftError>,
    capacity: usize,
}

impl ErrorManager {
    /// Create a new error manager
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an error manager keeping at most `capacity` errors
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            errors: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn handle(&mut self, err: RiftError) {
        match err.severity {
            ErrorSeverity::Critical | ErrorSeverity::Error => {
                tracing::error!(kind = %err.kind, code = %err.code, "{}", err.message);
            }
            ErrorSeverity::Warning => {
                tracing::warn!(kind = %err.kind, code = %err.code, "{}", err.message);
            }
            ErrorSeverity::Info => {
                tracing::info!(kind = %err.kind, code = %err.code, "{}", err.message);
            }
        }

        if self.errors.len() == self.capacity {
            self.errors.pop_front();
        }
        self.errors.push_back(err);
    }

    /// Errors handled so far, oldest first
    pub fn errors(&self) -> impl Iterator<Item = &RiftError> {
        self.errors.iter()
    }

    /// Most recently handled error
    #[must_use]
    pub fn last(&self) -> Option<&RiftError> {
        self.errors.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Default for ErrorManager {
    fn default() -> Self {
        Self::new()
    }
}
