// Bevy 0.16 text API uses components: Text, TextFont, TextColor, Node for UI text.
use bevy::prelude::*;

use crate::core::config::NoteConfig;
use crate::core::system::system_order::NotePresentSet;
use crate::interaction::session::note_session::{EditorFocus, NoteEditor};
use crate::persistence::NoteStore;

const CARET: char = '|';

/// Which piece of note state a text node shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTextRole {
    Body,
    Path,
    Display,
    Status,
}

pub struct NoteUiPlugin;

impl Plugin for NoteUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_note_ui)
            .add_systems(Update, refresh_note_text.in_set(NotePresentSet));
    }
}

fn spawn_note_ui(mut commands: Commands, cfg: Res<NoteConfig>) {
    let font_size = if cfg.ui.font_size > 0.0 { cfg.ui.font_size } else { 18.0 };
    commands.spawn(Camera2d);
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(10.0),
            padding: UiRect::all(Val::Px(12.0)),
            ..default()
        })
        .with_children(|root| {
            let rows = [
                (NoteTextRole::Status, font_size * 0.75, Color::srgb(0.6, 0.7, 0.8)),
                (NoteTextRole::Path, font_size, Color::srgb(0.85, 0.85, 0.6)),
                (NoteTextRole::Body, font_size, Color::WHITE),
                (NoteTextRole::Display, font_size, Color::srgb(0.7, 0.95, 0.75)),
            ];
            for (role, size, color) in rows {
                root.spawn((
                    Text::new(String::new()),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(color),
                    role,
                ));
            }
        });
}

/// Text for one role; kept free of ECS types so it can be unit tested.
pub fn note_text_for(role: NoteTextRole, store: &NoteStore, editor: &NoteEditor) -> String {
    let caret = |focus: EditorFocus| {
        if editor.focus == focus {
            CARET.to_string()
        } else {
            String::new()
        }
    };
    match role {
        NoteTextRole::Body => format!("Note:\n{}{}", editor.body, caret(EditorFocus::Body)),
        NoteTextRole::Path => format!("Path: {}{}", store.override_path(), caret(EditorFocus::Path)),
        NoteTextRole::Display => format!("Saved note:\n{}", store.display()),
        NoteTextRole::Status => format!(
            "auto-reload: {} (every {:.1}s)   Ctrl+S save   Ctrl+L load   F2 auto-reload   F3 reveal folder   Tab switch field",
            if store.auto_reload() { "on" } else { "off" },
            store.poll_interval_secs(),
        ),
    }
}

fn refresh_note_text(
    store: Res<NoteStore>,
    editor: Res<NoteEditor>,
    mut q_text: Query<(&mut Text, &NoteTextRole)>,
) {
    if !(store.is_changed() || editor.is_changed()) {
        return;
    }
    // Polling touches the store every interval; only reassign text that differs
    // so Bevy does not re-layout unchanged nodes.
    for (mut text, role) in &mut q_text {
        let wanted = note_text_for(*role, &store, &editor);
        if text.0 != wanted {
            text.0 = wanted;
        }
    }
}
