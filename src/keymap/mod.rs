//! Command bindings
//! Maps key sequences to command names so a key vector can be split into
//! the keys that invoked a command and whatever followed them

pub mod defaults;
pub mod trie;

pub use self::trie::{MatchResult, TrieNode};
use crate::error::Result;
use crate::key::{parse_keys, Key};

/// KeyMap stores mappings from key sequence -> command name
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    root: TrieNode,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single-key binding
    pub fn register(&mut self, key: Key, command: impl Into<String>) {
        self.register_sequence(&[key], command);
    }

    /// Register a sequence binding
    pub fn register_sequence(&mut self, keys: &[Key], command: impl Into<String>) {
        if keys.is_empty() {
            return;
        }
        self.root.insert(keys, command.into());
    }

    /// Register a binding written in key notation (`"gg"`, `"<C-w>w"`)
    pub fn register_str(&mut self, keys: &str, command: impl Into<String>) -> Result<()> {
        let keys = parse_keys(keys)?;
        self.register_sequence(&keys, command);
        Ok(())
    }

    /// Look up a key sequence
    pub fn lookup(&self, keys: &[Key]) -> MatchResult<'_> {
        if keys.is_empty() {
            return MatchResult::None;
        }
        self.root.lookup(keys)
    }

    /// Command bound to exactly this sequence
    pub fn binding(&self, keys: &[Key]) -> Option<&str> {
        match self.lookup(keys) {
            MatchResult::Exact(command) | MatchResult::Ambiguous(command) => Some(command),
            _ => None,
        }
    }

    /// Length of the longest prefix of `keys` bound to a command
    pub fn longest_bound_prefix(&self, keys: &[Key]) -> Option<usize> {
        let mut longest = None;
        for len in 1..=keys.len() {
            match self.lookup(&keys[..len]) {
                MatchResult::Exact(_) => return Some(len),
                MatchResult::Ambiguous(_) => longest = Some(len),
                MatchResult::Prefix => {}
                MatchResult::None => break,
            }
        }
        longest
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
