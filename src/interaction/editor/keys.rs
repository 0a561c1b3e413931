use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::interaction::session::note_session::{EditorFocus, NoteCommand, NoteEditor};
use crate::persistence::NoteStore;

const MODIFIER_KEYS: [KeyCode; 4] = [
    KeyCode::ControlLeft,
    KeyCode::ControlRight,
    KeyCode::SuperLeft,
    KeyCode::SuperRight,
];

/// Shortcuts: Ctrl/Cmd+S save, Ctrl/Cmd+L load, F2 auto-reload, F3 reveal
/// folder, Tab switches between body and path field.
pub fn shortcut_commands(keys: &ButtonInput<KeyCode>) -> Vec<NoteCommand> {
    let mut out = Vec::new();
    let modifier = keys.any_pressed(MODIFIER_KEYS);
    if modifier && keys.just_pressed(KeyCode::KeyS) {
        out.push(NoteCommand::Save);
    }
    if modifier && keys.just_pressed(KeyCode::KeyL) {
        out.push(NoteCommand::Load);
    }
    if keys.just_pressed(KeyCode::F2) {
        out.push(NoteCommand::ToggleAutoReload);
    }
    if keys.just_pressed(KeyCode::F3) {
        out.push(NoteCommand::RevealFolder);
    }
    out
}

/// Applies one logical key press to a text buffer. Enter only inserts a
/// newline in multiline fields.
pub fn apply_key(buf: &mut String, key: &Key, multiline: bool) {
    match key {
        Key::Character(s) if !s.chars().any(char::is_control) => buf.push_str(s),
        Key::Space => buf.push(' '),
        Key::Enter if multiline => buf.push('\n'),
        Key::Backspace => {
            buf.pop();
        }
        _ => {}
    }
}

pub fn editor_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut key_events: EventReader<KeyboardInput>,
    mut editor: ResMut<NoteEditor>,
    mut store: ResMut<NoteStore>,
    mut commands_out: EventWriter<NoteCommand>,
) {
    for cmd in shortcut_commands(&keys) {
        commands_out.write(cmd);
    }
    if keys.just_pressed(KeyCode::Tab) {
        editor.focus = editor.focus.next();
    }
    // Typed characters are dropped while a shortcut modifier is held.
    let modifier = keys.any_pressed(MODIFIER_KEYS);
    let focus = editor.focus;
    for ev in key_events.read() {
        if !ev.state.is_pressed() || modifier {
            continue;
        }
        match focus {
            EditorFocus::Body => apply_key(&mut editor.body, &ev.logical_key, true),
            EditorFocus::Path => apply_key(store.override_path_mut(), &ev.logical_key, false),
        }
    }
}
