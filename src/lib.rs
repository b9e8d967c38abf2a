//! rift-mc - keystroke recording for multiple cursors
//!
//! One cursor executes a command live; the recorder watches the keys it
//! reads and resolves them into a key vector and repeat count that the
//! other cursors replay.

pub mod constants;
pub mod count;
pub mod error;
pub mod host;
pub mod key;
pub mod keymap;
pub mod mode;
pub mod record;
pub mod recorder;
pub mod settings;
pub mod test_utils;

pub use error::{Result, RiftError};
pub use host::EditorHost;
pub use key::Key;
pub use mode::Mode;
pub use record::{CommandRecord, Slot, SlotValue};
pub use recorder::{CommandRecorder, Phase};
