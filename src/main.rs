//! Note Keeper: edit, save and reload a single text note.
//!
//! Usage:
//!   cargo run -- --dir /tmp/notes --auto-reload --interval 0.5
//!
//! Flags override values read from the layered RON config
//! (`assets/config/note.ron`, then `assets/config/note.local.ron`).

use std::path::PathBuf;

use anyhow::bail;
use bevy::prelude::*;
use clap::Parser;

use note_keeper::core::config::{NoteConfig, DEFAULT_CONFIG_PATHS};
use note_keeper::NoteAppPlugin;

#[derive(Parser, Debug)]
#[command(about = "Single-file note editor with external change polling", version, author)]
struct Args {
    /// Config file(s), later ones override earlier ones. Defaults to assets/config/note{,.local}.ron.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
    /// Explicit note path; replaces the default `<dir>/<file-name>`.
    #[arg(long)]
    path: Option<String>,
    /// Storage directory for the default note path.
    #[arg(long)]
    dir: Option<String>,
    #[arg(long)]
    file_name: Option<String>,
    /// Seconds between modification checks (never below 0.2).
    #[arg(long)]
    interval: Option<f32>,
    #[arg(long)]
    auto_reload: bool,
}

fn build_config(args: &Args) -> anyhow::Result<(NoteConfig, Vec<String>)> {
    let (mut cfg, _used, mut issues) = if args.configs.is_empty() {
        let [base, local] = DEFAULT_CONFIG_PATHS;
        NoteConfig::load_with_overlay(base, local)
    } else {
        NoteConfig::load_layered(args.configs.iter())
    };

    if let Some(path) = &args.path {
        cfg.persistence.override_path = path.clone();
    }
    if let Some(dir) = &args.dir {
        cfg.persistence.writable_dir = dir.clone();
    }
    if let Some(name) = &args.file_name {
        cfg.persistence.default_file_name = name.clone();
    }
    if let Some(secs) = args.interval {
        if !secs.is_finite() || secs < 0.0 {
            bail!("--interval must be a non-negative number of seconds (got {secs})");
        }
        cfg.persistence.reload_interval_secs = secs;
    }
    if args.auto_reload {
        cfg.persistence.auto_reload = true;
    }
    issues.extend(cfg.validate());
    Ok((cfg, issues))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (cfg, issues) = build_config(&args)?;

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width.max(1.0), cfg.window.height.max(1.0)).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        // Logging is only up once the app runs; report config problems from there.
        .add_systems(Startup, move || {
            for issue in &issues {
                warn!("CONFIG: {issue}");
            }
        })
        .add_plugins(NoteAppPlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with code {code}"),
    }
}
