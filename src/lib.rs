pub mod app;
pub mod core;
pub mod interaction;
pub mod persistence;
pub mod rendering;

// Curated re-exports
pub use crate::app::note_app::NoteAppPlugin;
pub use crate::core::config::{NoteConfig, PersistenceConfig, WindowConfig};
pub use crate::interaction::session::note_session::{NoteCommand, NoteEditor, NotePersistencePlugin};
pub use crate::persistence::{LoadOutcome, NoteError, NoteStore};
