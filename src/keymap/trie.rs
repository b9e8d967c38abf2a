use crate::key::Key;
use std::collections::HashMap;

/// Result of looking up a key sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// Exact match found
    Exact(&'a str),
    /// Sequence is a valid prefix of longer bindings but binds nothing itself
    Prefix,
    /// Sequence is a valid prefix AND binds a command itself (e.g. 'd')
    Ambiguous(&'a str),
    /// No match found
    None,
}

/// A node in the key sequence trie
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Children nodes mapped by key
    children: HashMap<Key, TrieNode>,
    /// Command bound to this sequence (if any)
    command: Option<String>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sequence into the trie
    pub fn insert(&mut self, keys: &[Key], command: String) {
        match keys.split_first() {
            None => self.command = Some(command),
            Some((key, rest)) => self.children.entry(*key).or_default().insert(rest, command),
        }
    }

    /// Look up a sequence
    pub fn lookup(&self, keys: &[Key]) -> MatchResult<'_> {
        let Some((key, rest)) = keys.split_first() else {
            return match (&self.command, self.children.is_empty()) {
                (Some(command), true) => MatchResult::Exact(command),
                (Some(command), false) => MatchResult::Ambiguous(command),
                (None, false) => MatchResult::Prefix,
                (None, true) => MatchResult::None,
            };
        };

        match self.children.get(key) {
            Some(child) => child.lookup(rest),
            None => MatchResult::None,
        }
    }

    /// Number of bound sequences at or below this node
    pub fn len(&self) -> usize {
        usize::from(self.command.is_some())
            + self.children.values().map(TrieNode::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
