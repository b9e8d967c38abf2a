//! Key resolution
//!
//! Once a command has run, its key phases are reduced to the one key vector
//! (plus repeat count) that reproduces it at another cursor.

use crate::constants::errors;
use crate::constants::keys::TARGET_PENDING;
use crate::count::CountExtraction;
use crate::error::{ErrorType, Result, RiftError};
use crate::host::EditorHost;
use crate::key::{format_keys, Key};
use crate::record::{CommandRecord, Slot, SlotValue};
use crate::settings::RecorderSettings;

/// Key vectors captured for one command, by phase
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPhases<'a> {
    pub pre: &'a [Key],
    pub post: &'a [Key],
    pub motion_pre: &'a [Key],
    pub motion_post: &'a [Key],
    pub operator_pre: &'a [Key],
    pub operator_post: &'a [Key],
}

impl<'a> KeyPhases<'a> {
    /// Read every phase slot from a record
    pub fn from_record(record: &'a CommandRecord) -> Result<Self> {
        Ok(Self {
            pre: record.keys(Slot::KeysPre)?,
            post: record.keys(Slot::KeysPost)?,
            motion_pre: record.keys(Slot::KeysMotionPre)?,
            motion_post: record.keys(Slot::KeysMotionPost)?,
            operator_pre: record.keys(Slot::KeysOperatorPre)?,
            operator_post: record.keys(Slot::KeysOperatorPost)?,
        })
    }
}

/// A lone `t`/`f` is incomplete without the target key read after it
fn is_target_pending(keys: &[Key]) -> bool {
    matches!(keys, [Key::Char(ch)] if TARGET_PENDING.contains(ch))
}

/// Pick the canonical key vector for a command
///
/// Precedence:
/// 1. Motion keys, post over pre.
/// 2. Operator keys, behind either the full pre keys (when a count was typed)
///    or the count-stripped command keys.
/// 3. Post keys, falling back to pre keys.
#[must_use]
pub fn resolve_keys(phases: &KeyPhases<'_>, extraction: &CountExtraction) -> Vec<Key> {
    if !phases.motion_pre.is_empty() || !phases.motion_post.is_empty() {
        let keys = if phases.motion_post.is_empty() {
            phases.motion_pre
        } else {
            phases.motion_post
        };
        return keys.to_vec();
    }

    if !phases.operator_pre.is_empty() || !phases.operator_post.is_empty() {
        let prefix: &[Key] = if extraction.has_count() {
            phases.pre
        } else {
            &extraction.command
        };

        let op_pre = phases.operator_pre;
        let op_post = phases.operator_post;
        let collapse = op_pre == extraction.command.as_slice()
            || (op_pre == op_post && !is_target_pending(op_pre))
            || op_pre.len() > 1;

        let mut keys = prefix.to_vec();
        if !collapse {
            keys.extend_from_slice(op_pre);
        }
        keys.extend_from_slice(op_post);
        return keys;
    }

    if phases.post.is_empty() {
        phases.pre.to_vec()
    } else {
        phases.post.to_vec()
    }
}

/// Resolve the record's keys and count, writing `keys-count` and `keys`
pub fn finalize<H>(
    record: &mut CommandRecord,
    host: &H,
    settings: &RecorderSettings,
) -> Result<()>
where
    H: EditorHost + ?Sized,
{
    let (count, keys) = {
        let phases = KeyPhases::from_record(record)?;
        let extraction = host.extract_count(phases.pre)?;

        let count = extraction.count_or_default();
        if let Some(max) = settings.max_count.filter(|max| count > *max) {
            return Err(RiftError::new(
                ErrorType::MalformedKeyVector,
                errors::COUNT_TOO_LARGE,
                format!(
                    "count {count} in '{}' exceeds max_count {max}",
                    format_keys(phases.pre),
                ),
            ));
        }

        (count, resolve_keys(&phases, &extraction))
    };

    record.set(Slot::KeysCount, SlotValue::Count(count));
    record.set(Slot::Keys, keys);
    Ok(())
}
