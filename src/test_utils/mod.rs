//! Test utilities
//! Shared testing helpers and mocks

use crate::error::{ErrorManager, RiftError};
use crate::host::EditorHost;
use crate::key::{parse_keys, Key};
use crate::keymap::KeyMap;
use crate::mode::Mode;
use std::collections::HashSet;

/// Commands the mock host treats as replayable
pub const KNOWN_COMMANDS: &[&str] = &[
    "delete",
    "change",
    "yank",
    "delete-line",
    "delete-char",
    "paste-after",
    "forward-word-begin",
    "backward-word-begin",
    "find-char-to",
    "find-char",
    "insert",
    "append",
    "replace-char",
];

/// Mock editor host for testing
/// Scripted state plus a record of every reported error
pub struct MockHost {
    pub mode: Mode,
    pub cursors: usize,
    pub command: Option<String>,
    pub known: HashSet<String>,
    pub raw_keys: Vec<Key>,
    pub single_raw_keys: Vec<Key>,
    pub last_input: Option<Key>,
    pub keymap: KeyMap,
    pub errors: ErrorManager,
}

impl MockHost {
    /// Two cursors in normal mode with the default vim bindings
    pub fn new() -> Self {
        MockHost {
            mode: Mode::Normal,
            cursors: 2,
            command: None,
            known: KNOWN_COMMANDS.iter().map(|c| c.to_string()).collect(),
            raw_keys: Vec::new(),
            single_raw_keys: Vec::new(),
            last_input: None,
            keymap: KeyMap::vim_defaults(),
            errors: ErrorManager::new(),
        }
    }

    /// Start a command: `keys` are the keys read to invoke it
    ///
    /// Panics on malformed key notation; only meant for tests and benches.
    pub fn start_command(&mut self, name: &str, keys: &str) {
        self.command = Some(name.to_string());
        self.single_raw_keys.clear();
        self.raw_keys.clear();
        self.read_keys(keys);
    }

    /// Replace the keys read so far for the current command
    pub fn set_keys(&mut self, keys: &str) {
        self.raw_keys.clear();
        self.read_keys(keys);
    }

    /// Read more keys for the current command
    pub fn read_keys(&mut self, keys: &str) {
        let keys = parse_keys(keys).unwrap_or_else(|e| panic!("bad test keys {keys:?}: {e}"));
        if let Some(last) = keys.last() {
            self.last_input = Some(*last);
        }
        self.single_raw_keys.extend_from_slice(&keys);
        self.raw_keys.extend(keys);
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorHost for MockHost {
    fn current_mode(&self) -> Mode {
        self.mode
    }

    fn has_multiple_cursors(&self) -> bool {
        self.cursors > 1
    }

    fn current_command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    fn is_known_replayable_command(&self, command: &str) -> bool {
        self.known.contains(command)
    }

    fn current_raw_keys(&self) -> Vec<Key> {
        self.raw_keys.clone()
    }

    fn last_single_command_raw_keys(&self) -> Vec<Key> {
        self.single_raw_keys.clone()
    }

    fn last_input_event(&self) -> Option<Key> {
        self.last_input
    }

    fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    fn report_error(&mut self, err: &RiftError) {
        self.errors.handle(err.clone());
    }
}
