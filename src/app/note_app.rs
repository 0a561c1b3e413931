// This file is part of Note Keeper.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::{NoteInputSet, NoteIoSet, NotePresentSet};
use crate::interaction::editor::NoteEditorPlugin;
use crate::interaction::session::note_session::NotePersistencePlugin;
use crate::rendering::note_ui::NoteUiPlugin;

/// Everything the windowed note app needs on top of `DefaultPlugins`.
pub struct NoteAppPlugin;

impl Plugin for NoteAppPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                NoteInputSet,
                NoteIoSet.after(NoteInputSet),
                NotePresentSet.after(NoteIoSet),
            ),
        )
        .add_plugins((NotePersistencePlugin, NoteEditorPlugin, NoteUiPlugin));
    }
}
