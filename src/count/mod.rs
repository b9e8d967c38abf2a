//! Numeric prefix extraction
//!
//! A recorded key vector may start with a repeat count (`3w`, `12dd`). The
//! count is split off, then the remaining keys are divided into the keys
//! that invoked the command and whatever was read after them.

use crate::error::{Result, RiftError};
use crate::key::{format_keys, Key};
use crate::keymap::KeyMap;

/// A key vector split into count, command keys, and trailing keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountExtraction {
    /// Leading repeat count, if one was typed
    pub count: Option<usize>,
    /// Keys bound to the command, count stripped
    pub command: Vec<Key>,
    /// Keys read after the command keys
    pub rest: Vec<Key>,
}

impl CountExtraction {
    #[must_use]
    pub fn has_count(&self) -> bool {
        self.count.is_some()
    }

    /// Count to replay with; an absent count means 1
    #[must_use]
    pub fn count_or_default(&self) -> usize {
        self.count.unwrap_or(1)
    }
}

/// Split `keys` into its leading count and the command keys that follow
///
/// A leading `0` is never a count (it is the line-start motion), but zeros
/// after the first digit are. The command keys are the longest prefix of the
/// remainder bound in `keymap`; when nothing is bound the whole remainder is
/// the command.
pub fn extract_count(keys: &[Key], keymap: &KeyMap) -> Result<CountExtraction> {
    let mut count: Option<usize> = None;
    let mut digits = 0;

    for key in keys {
        let Some(digit) = key.digit() else { break };
        if digits == 0 && digit == 0 {
            break;
        }
        let value = count
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit as usize))
            .ok_or_else(|| {
                RiftError::malformed_keys(format!(
                    "count prefix of '{}' overflows",
                    format_keys(keys)
                ))
            })?;
        count = Some(value);
        digits += 1;
    }

    let remainder = &keys[digits..];
    if count.is_some() && remainder.is_empty() {
        return Err(RiftError::malformed_keys(format!(
            "count '{}' is not followed by a command",
            format_keys(keys)
        )));
    }

    let split = keymap
        .longest_bound_prefix(remainder)
        .unwrap_or(remainder.len());

    Ok(CountExtraction {
        count,
        command: remainder[..split].to_vec(),
        rest: remainder[split..].to_vec(),
    })
}
