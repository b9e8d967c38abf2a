//! Host editor interface
//!
//! Everything the recorder needs to know about the editor it runs inside.
//! Queries are pure reads of current editor state; only `report_error`
//! mutates the host.

use crate::count::{self, CountExtraction};
use crate::error::{Result, RiftError};
use crate::key::Key;
use crate::keymap::KeyMap;
use crate::mode::Mode;

/// Editor the recorder observes
pub trait EditorHost {
    /// Mode the editor is in right now
    fn current_mode(&self) -> Mode;

    /// Whether more than one cursor is active
    fn has_multiple_cursors(&self) -> bool;

    /// Name of the command being executed, if any
    fn current_command(&self) -> Option<&str>;

    /// Whether `command` can be replayed at the other cursors
    fn is_known_replayable_command(&self, command: &str) -> bool;

    /// Keys read so far for the in-progress command
    fn current_raw_keys(&self) -> Vec<Key>;

    /// Raw keys of the last single command, before any remapping
    fn last_single_command_raw_keys(&self) -> Vec<Key>;

    /// Last input event read by the editor
    fn last_input_event(&self) -> Option<Key>;

    /// Bindings used to split command keys from the keys after them
    fn keymap(&self) -> &KeyMap;

    /// Split a key vector into count, command keys, and trailing keys
    fn extract_count(&self, keys: &[Key]) -> Result<CountExtraction> {
        count::extract_count(keys, self.keymap())
    }

    /// Error channel for failures contained by the recorder; the host owns
    /// logging them
    fn report_error(&mut self, err: &RiftError);
}
