//! Note persistence core: one text file, its path, and change polling.
//! Host-agnostic; the Bevy wiring lives in `interaction`.

pub mod error;
pub mod fs;
#[cfg(test)]
pub(crate) mod memory_fs;
pub mod path;
pub mod store;

pub use error::{NoteError, NoteOp};
pub use fs::{NoteFs, StdFs};
pub use path::{default_writable_dir, expand_path};
pub use store::{
    LoadOutcome, NoteStore, DEFAULT_FILE_NAME, MIN_POLL_INTERVAL_SECS, NOT_FOUND_PLACEHOLDER,
    NO_NOTE_PLACEHOLDER,
};
