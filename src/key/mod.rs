//! Key representation for recorded input
//!
//! Keys render in vim notation (`d`, `<Esc>`, `<C-w>`) so a recorded key
//! vector can be logged, stored, and parsed back.

use crate::error::{Result, RiftError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// Represents a single key event in a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+W)
    Ctrl(char),
    /// Alt/Meta key combination
    Alt(char),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Navigation keys
    Home,
    End,
    PageUp,
    PageDown,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    /// Function key F1..F12
    F(u8),
}

impl Key {
    /// Decimal value of a digit key, if this is one
    #[must_use]
    pub fn digit(self) -> Option<u32> {
        match self {
            Key::Char(ch) => ch.to_digit(10),
            _ => None,
        }
    }

    /// Named keys, used by both `Display` and `parse_keys`
    fn name(self) -> Option<&'static str> {
        let name = match self {
            Key::ArrowUp => "Up",
            Key::ArrowDown => "Down",
            Key::ArrowLeft => "Left",
            Key::ArrowRight => "Right",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::Backspace => "BS",
            Key::Delete => "Del",
            Key::Enter => "CR",
            Key::Escape => "Esc",
            Key::Tab => "Tab",
            Key::Char(' ') => "Space",
            Key::Char('<') => "lt",
            _ => return None,
        };
        Some(name)
    }

    fn from_name(name: &str) -> Option<Key> {
        let lower = name.to_ascii_lowercase();
        let key = match lower.as_str() {
            "up" => Key::ArrowUp,
            "down" => Key::ArrowDown,
            "left" => Key::ArrowLeft,
            "right" => Key::ArrowRight,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "bs" | "backspace" => Key::Backspace,
            "del" | "delete" => Key::Delete,
            "cr" | "enter" | "return" => Key::Enter,
            "esc" => Key::Escape,
            "tab" => Key::Tab,
            "space" => Key::Char(' '),
            "lt" => Key::Char('<'),
            _ => {
                if lower.starts_with("c-") {
                    return single_char(&name[2..]).map(Key::Ctrl);
                }
                if lower.starts_with("m-") || lower.starts_with("a-") {
                    return single_char(&name[2..]).map(Key::Alt);
                }
                if let Some(num) = lower.strip_prefix('f') {
                    return num
                        .parse::<u8>()
                        .ok()
                        .filter(|n| (1..=12).contains(n))
                        .map(Key::F);
                }
                return None;
            }
        };
        Some(key)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return write!(f, "<{name}>");
        }
        match self {
            Key::Char(ch) => write!(f, "{ch}"),
            Key::Ctrl(ch) => write!(f, "<C-{ch}>"),
            Key::Alt(ch) => write!(f, "<M-{ch}>"),
            Key::F(n) => write!(f, "<F{n}>"),
            _ => Ok(()),
        }
    }
}

/// Render a key vector in vim notation
#[must_use]
pub fn format_keys(keys: &[Key]) -> String {
    keys.iter().map(ToString::to_string).collect()
}

/// Parse vim notation (`d2w`, `ct<Space>`, `<C-r>a<Esc>`) into a key vector
pub fn parse_keys(input: &str) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if ch != '<' {
            keys.push(Key::Char(ch));
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let Some(close) = rest.find('>') else {
            return Err(RiftError::malformed_keys(format!(
                "unterminated key name in '{input}'"
            )));
        };
        let name = &rest[1..close];
        let key = Key::from_name(name).ok_or_else(|| {
            RiftError::malformed_keys(format!("unknown key <{name}> in '{input}'"))
        })?;
        keys.push(key);
        rest = &rest[close + 1..];
    }

    Ok(keys)
}

/// Translate a crossterm `KeyEvent` into a recorded key
///
/// Returns `None` for events with no key equivalent (media keys, modifiers
/// pressed on their own, and so on).
#[must_use]
pub fn translate_key_event(key_event: KeyEvent) -> Option<Key> {
    let modifiers = key_event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let key = match key_event.code {
        KeyCode::Char(ch) => {
            // Some terminals deliver Enter as a raw carriage return
            if ch == '\r' || ch == '\n' {
                return Some(Key::Enter);
            }
            if ctrl {
                Key::Ctrl(ch.to_ascii_lowercase())
            } else if alt {
                Key::Alt(ch)
            } else {
                Key::Char(ch)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Delete => Key::Delete,
        KeyCode::F(n) if (1..=12).contains(&n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
