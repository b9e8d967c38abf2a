//! Default vim bindings used to split counts and commands out of key vectors

use super::KeyMap;
use crate::key::Key;

const MOTIONS: &[(&str, &str)] = &[
    ("h", "backward-char"),
    ("j", "next-line"),
    ("k", "previous-line"),
    ("l", "forward-char"),
    ("w", "forward-word-begin"),
    ("W", "forward-WORD-begin"),
    ("b", "backward-word-begin"),
    ("B", "backward-WORD-begin"),
    ("e", "forward-word-end"),
    ("E", "forward-WORD-end"),
    ("0", "beginning-of-line"),
    ("^", "first-non-blank"),
    ("$", "end-of-line"),
    ("t", "find-char-to"),
    ("T", "find-char-to-backward"),
    ("f", "find-char"),
    ("F", "find-char-backward"),
    (";", "repeat-find-char"),
    (",", "repeat-find-char-reverse"),
    ("gg", "goto-first-line"),
    ("G", "goto-line"),
    ("%", "jump-item"),
    ("{", "backward-paragraph"),
    ("}", "forward-paragraph"),
];

const OPERATORS: &[(&str, &str)] = &[
    ("d", "delete"),
    ("c", "change"),
    ("y", "yank"),
    (">", "shift-right"),
    ("<", "shift-left"),
    ("g~", "invert-case"),
    ("gu", "downcase"),
    ("gU", "upcase"),
    ("=", "indent"),
];

const COMMANDS: &[(&str, &str)] = &[
    ("dd", "delete-line"),
    ("cc", "change-line"),
    ("yy", "yank-line"),
    ("x", "delete-char"),
    ("X", "delete-backward-char"),
    ("D", "delete-to-eol"),
    ("C", "change-to-eol"),
    ("s", "substitute"),
    ("S", "change-whole-line"),
    ("r", "replace-char"),
    ("R", "replace-state"),
    ("p", "paste-after"),
    ("P", "paste-before"),
    ("i", "insert"),
    ("I", "insert-line"),
    ("a", "append"),
    ("A", "append-line"),
    ("o", "open-below"),
    ("O", "open-above"),
    ("J", "join"),
    ("~", "invert-char"),
    ("u", "undo"),
    ("v", "visual-char"),
    ("V", "visual-line"),
    (".", "repeat"),
];

impl KeyMap {
    /// Bindings for the common vim motions, operators, and commands
    #[must_use]
    pub fn vim_defaults() -> Self {
        let mut map = KeyMap::new();
        for (keys, command) in MOTIONS.iter().chain(OPERATORS).chain(COMMANDS) {
            let keys: Vec<Key> = keys.chars().map(Key::Char).collect();
            map.register_sequence(&keys, *command);
        }
        map.register(Key::Ctrl('r'), "redo");
        map
    }
}
