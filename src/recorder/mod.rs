//! Command recording for multiple cursors
//!
//! One cursor runs a command live while the recorder watches which keys it
//! read. When the command finishes, the observed phases are resolved into
//! the key vector the other cursors replay.

//! ## recorder/ Invariants
//!
//! - Recording and replaying are mutually exclusive.
//! - A record exists only while a command is being recorded.
//! - `try_finish` always leaves the recorder idle, whatever finalize returns.
//! - Phase collectors never fail towards the host; a failed append is kept
//!   and surfaces from the next finish.

use crate::constants::errors;
use crate::error::{ErrorType, Result, RiftError};
use crate::host::EditorHost;
use crate::key::format_keys;
use crate::mode::Mode;
use crate::record::{CommandRecord, Slot, SlotValue};
use crate::settings::RecorderSettings;

pub mod finalize;

pub use finalize::{finalize, resolve_keys, KeyPhases};

/// When a key capture happens relative to the host resolving the keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pre,
    Post,
}

/// Records one command at a time
pub struct CommandRecorder {
    settings: RecorderSettings,
    recording: bool,
    replaying: bool,
    record: Option<CommandRecord>,
    /// First collector failure for the in-flight record
    failure: Option<RiftError>,
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::with_settings(RecorderSettings::default())
    }

    pub fn with_settings(settings: RecorderSettings) -> Self {
        Self {
            settings,
            recording: false,
            replaying: false,
            record: None,
            failure: None,
        }
    }

    pub fn settings(&self) -> &RecorderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RecorderSettings {
        &mut self.settings
    }

    /// Whether a command is being recorded
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Whether a recorded command is being replayed
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Toggle the replaying flag.
    pub fn set_replaying(&mut self, replaying: bool) {
        self.replaying = replaying;
    }

    /// The in-flight record, if recording
    pub fn record(&self) -> Option<&CommandRecord> {
        self.record.as_ref()
    }

    /// Drop any record and stop recording
    pub fn reset(&mut self) {
        self.recording = false;
        self.record = None;
        self.failure = None;
    }

    /// Start recording the command the host is about to run
    ///
    /// Silently records nothing while replaying, when disabled, with a single
    /// cursor, in emacs mode, or for commands that cannot be replayed. A
    /// record left over from a command that never finished is dropped.
    pub fn begin<H>(&mut self, host: &H)
    where
        H: EditorHost + ?Sized,
    {
        if self.replaying {
            return;
        }
        if self.recording {
            let stale = self.record.as_ref().and_then(CommandRecord::command_name);
            tracing::warn!(
                code = errors::STALE_RECORD,
                command = stale.unwrap_or("<unnamed>"),
                "dropping record of a command that never finished"
            );
            self.reset();
            return;
        }
        self.reset();

        if !self.settings.enabled || !host.has_multiple_cursors() {
            return;
        }
        let mode = host.current_mode();
        if mode == Mode::Emacs {
            tracing::debug!("not recording in emacs mode");
            return;
        }
        let Some(command) = host.current_command() else {
            return;
        };
        if !host.is_known_replayable_command(command) {
            tracing::debug!(command, "not recording unknown command");
            return;
        }

        let keys_pre = host.current_raw_keys();
        tracing::debug!(command, %mode, keys = %format_keys(&keys_pre), "recording command");

        let mut record = CommandRecord::new();
        record.set_many([
            (Slot::Name, SlotValue::Name(command.to_string())),
            (Slot::KeysPre, SlotValue::Keys(keys_pre)),
            (Slot::StateBegin, SlotValue::Mode(mode)),
        ]);
        self.record = Some(record);
        self.recording = true;
    }

    /// Capture the keys read around a motion
    pub fn save_motion<H>(&mut self, phase: Phase, host: &H)
    where
        H: EditorHost + ?Sized,
    {
        let slot = match phase {
            Phase::Pre => Slot::KeysMotionPre,
            Phase::Post => Slot::KeysMotionPost,
        };
        self.save_keys(slot, host);
    }

    /// Capture the keys read around an operator, in operator mode only
    pub fn save_operator<H>(&mut self, phase: Phase, host: &H)
    where
        H: EditorHost + ?Sized,
    {
        if !self.recording || host.current_mode() != Mode::Operator {
            return;
        }
        let slot = match phase {
            Phase::Pre => Slot::KeysOperatorPre,
            Phase::Post => Slot::KeysOperatorPost,
        };
        self.save_keys(slot, host);
    }

    fn save_keys<H>(&mut self, slot: Slot, host: &H)
    where
        H: EditorHost + ?Sized,
    {
        if !self.recording {
            return;
        }
        let Some(record) = self.record.as_mut() else {
            return;
        };

        let keys = host.current_raw_keys();
        tracing::trace!(%slot, keys = %format_keys(&keys), "saving keys");
        if let Err(err) = record.append(slot, keys) {
            if self.failure.is_none() {
                self.failure = Some(err);
            }
        }
    }

    /// Overwrite a slot of the in-flight record
    pub fn set_property(&mut self, slot: Slot, value: impl Into<SlotValue>) -> Result<()> {
        self.record_mut()?.set(slot, value);
        Ok(())
    }

    /// Append keys to a slot of the in-flight record
    pub fn append_property(&mut self, slot: Slot, value: impl Into<SlotValue>) -> Result<()> {
        self.record_mut()?.append(slot, value)
    }

    fn record_mut(&mut self) -> Result<&mut CommandRecord> {
        self.record.as_mut().ok_or_else(|| {
            RiftError::new(
                ErrorType::Internal,
                "NOT_RECORDING",
                "no command is being recorded",
            )
        })
    }

    /// Finish recording and resolve the command's keys
    ///
    /// Returns `Ok(None)` when nothing was being recorded. The recorder is
    /// idle afterwards whether or not finalize succeeded; errors carry the
    /// command name.
    pub fn try_finish<H>(&mut self, host: &H) -> Result<Option<CommandRecord>>
    where
        H: EditorHost + ?Sized,
    {
        if !self.recording {
            return Ok(None);
        }
        let record = self.record.take();
        let failure = self.failure.take();
        self.reset();

        let Some(mut record) = record else {
            return Ok(None);
        };
        let name = record.command_name().unwrap_or("<unnamed>").to_string();
        if let Some(err) = failure {
            return Err(err.in_command(&name));
        }

        record.set_many([
            (Slot::StateEnd, SlotValue::Mode(host.current_mode())),
            (Slot::KeysPost, SlotValue::Keys(host.current_raw_keys())),
            (
                Slot::KeysPostRaw,
                SlotValue::Keys(host.last_single_command_raw_keys()),
            ),
        ]);
        if let Some(key) = host.last_input_event() {
            record.set(Slot::LastInput, key);
        }

        finalize(&mut record, host, &self.settings).map_err(|err| err.in_command(&name))?;

        if self.settings.debug {
            tracing::info!(command = %record, "recorded command");
        } else {
            tracing::debug!(command = %record, "recorded command");
        }
        Ok(Some(record))
    }

    /// Finish recording, reporting any failure through the host
    ///
    /// Failures never reach the caller: they are reported and the command is
    /// simply not recorded.
    pub fn finish<H>(&mut self, host: &mut H) -> Option<CommandRecord>
    where
        H: EditorHost + ?Sized,
    {
        match self.try_finish(&*host) {
            Ok(record) => record,
            Err(err) => {
                host.report_error(&err);
                None
            }
        }
    }
}
