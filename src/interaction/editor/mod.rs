//! Keyboard editing of the note body and path field, plus editor-only tooling.

pub mod keys; // pub for testing
pub mod reveal;

use bevy::prelude::*;

use crate::core::system::system_order::{NoteInputSet, NoteIoSet};

pub struct NoteEditorPlugin;

impl Plugin for NoteEditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<reveal::RevealStatus>()
            .add_systems(Update, keys::editor_key_input_system.in_set(NoteInputSet))
            .add_systems(Update, reveal::handle_reveal_requests.in_set(NoteIoSet));
    }
}
