use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::persistence::store::{DEFAULT_FILE_NAME, DEFAULT_RELOAD_INTERVAL_SECS, MIN_POLL_INTERVAL_SECS};

/// Config files read at startup; later files override earlier ones key by key.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["assets/config/note.ron", "assets/config/note.local.ron"];

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            title: "Note Keeper".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PersistenceConfig {
    pub default_file_name: String,
    /// Storage root. Empty = platform data directory.
    pub writable_dir: String,
    /// Initial contents of the path field. Empty = default path.
    pub override_path: String,
    pub reload_interval_secs: f32,
    pub auto_reload: bool,
}
impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            default_file_name: DEFAULT_FILE_NAME.into(),
            writable_dir: String::new(),
            override_path: String::new(),
            reload_interval_secs: DEFAULT_RELOAD_INTERVAL_SECS,
            auto_reload: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub font_size: f32,
}
impl Default for UiConfig {
    fn default() -> Self {
        Self { font_size: 18.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct NoteConfig {
    pub window: WindowConfig,
    pub persistence: PersistenceConfig,
    pub ui: UiConfig,
}

impl NoteConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// `base` plus an optional local `overlay`. A missing overlay is not
    /// reported; one that exists but cannot be read or parsed is.
    pub fn load_with_overlay(
        base: impl AsRef<Path>,
        overlay: impl AsRef<Path>,
    ) -> (Self, Vec<String>, Vec<String>) {
        let mut paths = vec![base.as_ref().to_path_buf()];
        if overlay.as_ref().exists() {
            paths.push(overlay.as_ref().to_path_buf());
        }
        Self::load_layered(paths)
    }

    /// Merges every readable file in order and deserializes the result.
    /// Returns (config, used paths, errors); unreadable files are skipped.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        match existing {
                            Some(ev) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<NoteConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                    (NoteConfig::default(), used, errors)
                }
            },
            None => (NoteConfig::default(), used, errors),
        }
    }

    /// Non-fatal sanity checks; each entry is a human-readable warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push(format!(
                "window dimensions must be > 0 (got {}x{})",
                self.window.width, self.window.height
            ));
        }
        let p = &self.persistence;
        let name = p.default_file_name.trim();
        if name.is_empty() {
            w.push(format!("persistence.default_file_name empty; using '{DEFAULT_FILE_NAME}'"));
        } else if name.contains(['/', '\\']) {
            w.push(format!(
                "persistence.default_file_name '{name}' contains a path separator; use writable_dir or override_path"
            ));
        }
        if !p.reload_interval_secs.is_finite() {
            w.push(format!(
                "persistence.reload_interval_secs not finite; polling every {MIN_POLL_INTERVAL_SECS}s"
            ));
        } else if p.reload_interval_secs < MIN_POLL_INTERVAL_SECS {
            w.push(format!(
                "persistence.reload_interval_secs {} below floor; clamped to {MIN_POLL_INTERVAL_SECS}s",
                p.reload_interval_secs
            ));
        }
        if self.ui.font_size <= 0.0 {
            w.push(format!("ui.font_size must be > 0 (got {})", self.ui.font_size));
        }
        w
    }
}
