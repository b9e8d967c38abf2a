//! Command record
//!
//! The property store for one recorded command: a fixed set of named slots,
//! each holding a tagged value.

//! ## record/ Invariants
//!
//! - A record lives for exactly one command and is never shared.
//! - `append` only ever concatenates key vectors; any other combination is a
//!   `TypeMismatch` and leaves the slot untouched.
//! - `Slot::Keys` is written once, by the finalizer, as the last write.

use crate::error::{ErrorType, Result, RiftError};
use crate::key::{format_keys, Key};
use crate::mode::Mode;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Named slots of a command record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Name,
    StateBegin,
    StateEnd,
    KeysPre,
    KeysPost,
    KeysPostRaw,
    KeysMotionPre,
    KeysMotionPost,
    KeysOperatorPre,
    KeysOperatorPost,
    KeysCount,
    Keys,
    LastInput,
}

impl Slot {
    pub const ALL: [Slot; 13] = [
        Slot::Name,
        Slot::StateBegin,
        Slot::StateEnd,
        Slot::KeysPre,
        Slot::KeysPost,
        Slot::KeysPostRaw,
        Slot::KeysMotionPre,
        Slot::KeysMotionPost,
        Slot::KeysOperatorPre,
        Slot::KeysOperatorPost,
        Slot::KeysCount,
        Slot::Keys,
        Slot::LastInput,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Name => "name",
            Slot::StateBegin => "evil-state-begin",
            Slot::StateEnd => "evil-state-end",
            Slot::KeysPre => "keys-pre",
            Slot::KeysPost => "keys-post",
            Slot::KeysPostRaw => "keys-post-raw",
            Slot::KeysMotionPre => "keys-motion-pre",
            Slot::KeysMotionPost => "keys-motion-post",
            Slot::KeysOperatorPre => "keys-operator-pre",
            Slot::KeysOperatorPost => "keys-operator-post",
            Slot::KeysCount => "keys-count",
            Slot::Keys => "keys",
            Slot::LastInput => "last-input",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = RiftError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches(':');
        Slot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == name)
            .ok_or_else(|| {
                RiftError::new(ErrorType::Parse, "UNKNOWN_SLOT", format!("Unknown slot: {s}"))
            })
    }
}

/// Value held by a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    /// Command identifier
    Name(String),
    /// Mode tag
    Mode(Mode),
    /// Ordered key vector
    Keys(Vec<Key>),
    /// Repeat count
    Count(usize),
    /// Single key event
    Key(Key),
}

impl SlotValue {
    /// Short description of the variant, for error messages
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            SlotValue::Name(_) => "a command name",
            SlotValue::Mode(_) => "a mode",
            SlotValue::Keys(_) => "a key vector",
            SlotValue::Count(_) => "a count",
            SlotValue::Key(_) => "a single key",
        }
    }
}

impl From<Vec<Key>> for SlotValue {
    fn from(keys: Vec<Key>) -> Self {
        SlotValue::Keys(keys)
    }
}

impl From<Mode> for SlotValue {
    fn from(mode: Mode) -> Self {
        SlotValue::Mode(mode)
    }
}

impl From<Key> for SlotValue {
    fn from(key: Key) -> Self {
        SlotValue::Key(key)
    }
}

/// In-progress or finalized record of a single command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRecord {
    slots: BTreeMap<Slot, SlotValue>,
}

impl CommandRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&SlotValue> {
        self.slots.get(&slot)
    }

    /// Overwrite a slot
    pub fn set(&mut self, slot: Slot, value: impl Into<SlotValue>) {
        self.slots.insert(slot, value.into());
    }

    /// Overwrite several slots at once
    pub fn set_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (Slot, SlotValue)>,
    {
        self.slots.extend(values);
    }

    /// Concatenate a key vector onto a slot, or set it when absent
    pub fn append(&mut self, slot: Slot, value: impl Into<SlotValue>) -> Result<()> {
        let mut incoming = match value.into() {
            SlotValue::Keys(keys) => keys,
            other => return Err(RiftError::type_mismatch(slot, other.describe())),
        };

        match self.slots.get_mut(&slot) {
            None => {
                self.slots.insert(slot, SlotValue::Keys(incoming));
                Ok(())
            }
            Some(SlotValue::Keys(existing)) => {
                existing.append(&mut incoming);
                Ok(())
            }
            Some(other) => Err(RiftError::type_mismatch(slot, other.describe())),
        }
    }

    /// Key vector held by `slot`; an absent slot reads as empty
    pub fn keys(&self, slot: Slot) -> Result<&[Key]> {
        match self.slots.get(&slot) {
            None => Ok(&[]),
            Some(SlotValue::Keys(keys)) => Ok(keys),
            Some(other) => Err(RiftError::type_mismatch(slot, other.describe())),
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Keys the replay mechanism feeds to the other cursors
    #[must_use]
    pub fn resolved_keys(&self) -> &[Key] {
        match self.slots.get(&Slot::Keys) {
            Some(SlotValue::Keys(keys)) => keys,
            _ => &[],
        }
    }

    /// Times to repeat the resolved keys
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        match self.slots.get(&Slot::KeysCount) {
            Some(SlotValue::Count(count)) => *count,
            _ => 1,
        }
    }

    #[must_use]
    pub fn command_name(&self) -> Option<&str> {
        match self.slots.get(&Slot::Name) {
            Some(SlotValue::Name(name)) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn begin_mode(&self) -> Option<Mode> {
        self.mode(Slot::StateBegin)
    }

    #[must_use]
    pub fn end_mode(&self) -> Option<Mode> {
        self.mode(Slot::StateEnd)
    }

    #[must_use]
    pub fn last_input(&self) -> Option<Key> {
        match self.slots.get(&Slot::LastInput) {
            Some(SlotValue::Key(key)) => Some(*key),
            _ => None,
        }
    }

    fn mode(&self, slot: Slot) -> Option<Mode> {
        match self.slots.get(&slot) {
            Some(SlotValue::Mode(mode)) => Some(*mode),
            _ => None,
        }
    }
}

/// One-line summary used when logging recorded commands
impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} keys={} count={}",
            self.command_name().unwrap_or("<unnamed>"),
            format_keys(self.resolved_keys()),
            self.resolved_count()
        )?;

        if let (Some(begin), Some(end)) = (self.begin_mode(), self.end_mode()) {
            write!(f, " state={begin}->{end}")?;
        } else if let Some(begin) = self.begin_mode() {
            write!(f, " state={begin}")?;
        }

        for (slot, value) in &self.slots {
            if *slot == Slot::Keys {
                continue;
            }
            if let SlotValue::Keys(keys) = value {
                if !keys.is_empty() {
                    write!(f, " {slot}={}", format_keys(keys))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
