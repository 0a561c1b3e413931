// This file is part of Note Keeper.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bevy wiring for the note store: startup initialization from `NoteConfig`
//! and the `NoteCommand` event that buttons / shortcuts send.

use std::path::PathBuf;

use bevy::prelude::*;

use super::note_hot_reload::NoteHotReloadPlugin;
use crate::core::config::NoteConfig;
use crate::core::system::system_order::NoteIoSet;
use crate::persistence::{default_writable_dir, NoteStore};

/// User-level actions on the note. Hosts send these; the store never sees
/// widgets directly.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCommand {
    Save,
    Load,
    SetAutoReload(bool),
    ToggleAutoReload,
    /// Open the containing folder (handled by the editor tooling when built).
    RevealFolder,
}

/// Which text field keyboard input goes to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    #[default]
    Body,
    Path,
}

impl EditorFocus {
    pub fn next(self) -> Self {
        match self {
            EditorFocus::Body => EditorFocus::Path,
            EditorFocus::Path => EditorFocus::Body,
        }
    }
}

/// The note text being typed; `Save` writes exactly this.
#[derive(Resource, Debug, Default, Clone)]
pub struct NoteEditor {
    pub body: String,
    pub focus: EditorFocus,
}

pub struct NotePersistencePlugin;

impl Plugin for NotePersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NoteConfig>()
            .init_resource::<NoteStore>()
            .init_resource::<NoteEditor>()
            .add_event::<NoteCommand>()
            .add_systems(Startup, setup_note_store)
            .add_systems(Update, handle_note_commands.in_set(NoteIoSet))
            .add_plugins(NoteHotReloadPlugin);
    }
}

/// Storage root from config, or the platform data directory when unset.
pub fn resolve_writable_dir(cfg: &NoteConfig) -> PathBuf {
    let configured = cfg.persistence.writable_dir.trim();
    if configured.is_empty() {
        default_writable_dir()
    } else {
        PathBuf::from(configured)
    }
}

pub fn setup_note_store(cfg: Res<NoteConfig>, mut store: ResMut<NoteStore>) {
    let p = &cfg.persistence;
    store.set_override_path(p.override_path.clone());
    store.set_reload_interval(p.reload_interval_secs);
    store.set_auto_reload(p.auto_reload);
    store.initialize(&p.default_file_name, resolve_writable_dir(&cfg));
}

pub fn handle_note_commands(
    mut events: EventReader<NoteCommand>,
    mut store: ResMut<NoteStore>,
    editor: Res<NoteEditor>,
) {
    for cmd in events.read() {
        // Failures are logged by the store; nothing to surface here.
        match *cmd {
            NoteCommand::Save => {
                let _ = store.save(&editor.body);
            }
            NoteCommand::Load => {
                let _ = store.load();
            }
            NoteCommand::SetAutoReload(on) => set_auto_reload(&mut store, on),
            NoteCommand::ToggleAutoReload => {
                let on = !store.auto_reload();
                set_auto_reload(&mut store, on);
            }
            NoteCommand::RevealFolder => {}
        }
    }
}

fn set_auto_reload(store: &mut NoteStore, on: bool) {
    if store.auto_reload() != on {
        store.set_auto_reload(on);
        info!(enabled = on, interval_secs = store.poll_interval_secs(), "[AUTO-RELOAD] toggled");
    }
}
