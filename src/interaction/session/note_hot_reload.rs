// Note file hot-reload (desktop only).
// Polls the note's modification time from the frame loop while auto-reload is
// on. Spacing is handled by the store (floor-clamped interval); this system
// only feeds it unscaled app time so pausing virtual time does not stop polls.

use bevy::prelude::*;

use crate::core::system::system_order::NoteIoSet;
use crate::persistence::NoteStore;

use super::note_session::handle_note_commands;

pub struct NoteHotReloadPlugin;

impl Plugin for NoteHotReloadPlugin {
    fn build(&self, app: &mut App) {
        // Only meaningful on native (std::fs) targets.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(
                Update,
                poll_note_file.in_set(NoteIoSet).after(handle_note_commands),
            );
        }
    }
}

pub fn poll_note_file(time: Res<Time<Real>>, mut store: ResMut<NoteStore>) {
    // Immutable deref only: an idle store must not be flagged as changed.
    if !store.auto_reload() {
        return;
    }
    if store.tick(time.elapsed_secs_f64()) {
        debug!(path = %store.resolve_path().display(), "[AUTO-RELOAD] note reloaded");
    }
}
