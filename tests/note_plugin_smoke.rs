use std::fs;
use std::time::{Duration, SystemTime};

use bevy::prelude::*;
use note_keeper::core::config::NoteConfig;
use note_keeper::persistence::NO_NOTE_PLACEHOLDER;
use note_keeper::{NoteCommand, NoteEditor, NotePersistencePlugin, NoteStore};

fn app_with_dir(dir: &std::path::Path) -> App {
    let mut cfg = NoteConfig::default();
    cfg.persistence.writable_dir = dir.to_string_lossy().into_owned();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.add_plugins(NotePersistencePlugin);
    // First update runs Startup (store initialization)
    app.update();
    app
}

#[test]
fn startup_initializes_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_dir(dir.path());
    let mut store = app.world_mut().resource_mut::<NoteStore>();
    assert_eq!(store.resolve_path(), dir.path().join("note.txt"));
    assert_eq!(store.display(), NO_NOTE_PLACEHOLDER);
}

#[test]
fn startup_loads_existing_note() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("note.txt"), "from last session").unwrap();
    let app = app_with_dir(dir.path());
    assert_eq!(app.world().resource::<NoteStore>().display(), "from last session");
}

#[test]
fn save_and_load_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_dir(dir.path());
    app.world_mut().resource_mut::<NoteEditor>().body = "typed text".into();
    app.world_mut().send_event(NoteCommand::Save);
    app.update();
    assert_eq!(fs::read_to_string(dir.path().join("note.txt")).unwrap(), "typed text");

    app.world_mut().send_event(NoteCommand::Load);
    app.update();
    assert_eq!(app.world().resource::<NoteStore>().display(), "typed text");
}

#[test]
fn toggle_command_flips_auto_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_dir(dir.path());
    assert!(!app.world().resource::<NoteStore>().auto_reload());
    app.world_mut().send_event(NoteCommand::ToggleAutoReload);
    app.update();
    assert!(app.world().resource::<NoteStore>().auto_reload());
    app.world_mut().send_event(NoteCommand::SetAutoReload(false));
    app.update();
    assert!(!app.world().resource::<NoteStore>().auto_reload());
}

#[test]
fn auto_reload_picks_up_external_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, "v1").unwrap();
    let mut app = app_with_dir(dir.path());
    assert_eq!(app.world().resource::<NoteStore>().display(), "v1");

    fs::write(&path, "v2").unwrap();
    let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
    file.set_modified(SystemTime::now() + Duration::from_secs(60)).unwrap();

    app.world_mut().send_event(NoteCommand::SetAutoReload(true));
    // The first poll is due immediately once auto-reload is on.
    app.update();
    assert_eq!(app.world().resource::<NoteStore>().display(), "v2");
}

#[test]
fn override_path_from_config_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let custom = dir.path().join("custom").join("mine.txt");
    let mut cfg = NoteConfig::default();
    cfg.persistence.writable_dir = dir.path().to_string_lossy().into_owned();
    cfg.persistence.override_path = format!(" {} ", custom.display());
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.add_plugins(NotePersistencePlugin);
    app.update();

    app.world_mut().resource_mut::<NoteEditor>().body = "elsewhere".into();
    app.world_mut().send_event(NoteCommand::Save);
    app.update();
    assert_eq!(fs::read_to_string(&custom).unwrap(), "elsewhere");
    assert!(!dir.path().join("note.txt").exists());
}
