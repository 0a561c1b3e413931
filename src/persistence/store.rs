//! Single-document note persistence.
//!
//! `NoteStore` owns the path of one UTF-8 text file and the bookkeeping needed
//! to notice when someone else rewrites it. Every operation runs to completion
//! on the caller's thread. Failures are logged where they happen and returned
//! as values; nothing here panics on I/O.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use bevy::log::{error, info, warn};
use bevy::prelude::Resource;

use super::error::{NoteError, NoteOp};
use super::fs::{NoteFs, StdFs};
use super::path::expand_path;

pub const DEFAULT_FILE_NAME: &str = "note.txt";
/// Shown when no note file exists at startup.
pub const NO_NOTE_PLACEHOLDER: &str = "(No note yet)";
/// Shown when an explicit load finds no file.
pub const NOT_FOUND_PLACEHOLDER: &str = "(File not found)";
/// Polls never run closer together than this, whatever the configured interval.
pub const MIN_POLL_INTERVAL_SECS: f32 = 0.2;
pub const DEFAULT_RELOAD_INTERVAL_SECS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    NotFound,
}

#[derive(Resource, Debug)]
pub struct NoteStore<F: NoteFs = StdFs> {
    fs: F,
    writable_dir: PathBuf,
    default_path: PathBuf,
    current_path: PathBuf,
    /// Raw text of the user-editable path field; trimmed on use.
    override_path: String,
    last_write: Option<SystemTime>,
    next_poll_secs: f64,
    reload_interval_secs: f32,
    auto_reload: bool,
    loading_silently: bool,
    display: String,
    display_revision: u64,
}

impl NoteStore<StdFs> {
    /// Store backed by the real filesystem.
    pub fn new() -> Self {
        Self::with_fs(StdFs)
    }
}

impl Default for NoteStore<StdFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: NoteFs> NoteStore<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            writable_dir: PathBuf::new(),
            default_path: PathBuf::new(),
            current_path: PathBuf::new(),
            override_path: String::new(),
            last_write: None,
            next_poll_secs: 0.0,
            reload_interval_secs: DEFAULT_RELOAD_INTERVAL_SECS,
            auto_reload: false,
            loading_silently: false,
            display: String::new(),
            display_revision: 0,
        }
    }

    /// Computes the default path, seeds an empty override field with it and
    /// shows either the existing note or the "no note yet" placeholder.
    pub fn initialize(&mut self, default_file_name: &str, writable_dir: impl AsRef<Path>) {
        let writable_dir = writable_dir.as_ref();
        let file_name = if default_file_name.trim().is_empty() {
            DEFAULT_FILE_NAME
        } else {
            default_file_name.trim()
        };
        let default_path = writable_dir.join(file_name);
        self.writable_dir = writable_dir.to_path_buf();
        self.default_path = default_path.clone();
        self.current_path = default_path.clone();

        if self.override_path.trim().is_empty() {
            self.override_path = default_path.to_string_lossy().into_owned();
        }

        info!(dir = %writable_dir.display(), "[START] writable directory");
        info!(path = %default_path.display(), "[START] default note path");

        let path = self.resolve_path();
        if self.fs.exists(&path) {
            // Already logged inside `load`.
            let _ = self.load();
        } else {
            self.set_display(NO_NOTE_PLACEHOLDER);
        }
    }

    /// Override wins when non-empty after trimming; otherwise the last
    /// resolved path is reused.
    pub fn resolve_path(&mut self) -> PathBuf {
        let candidate = self.override_path.trim();
        if !candidate.is_empty() {
            self.current_path = PathBuf::from(candidate);
        }
        self.current_path.clone()
    }

    fn resolve_checked(&mut self) -> Result<PathBuf, NoteError> {
        let path = self.resolve_path();
        if path.as_os_str().is_empty() {
            error!("[NOTE][ERROR] no path: initialize the store or set an override path");
            return Err(NoteError::EmptyPath);
        }
        Ok(path)
    }

    /// Writes `content` as the whole file, creating missing parent directories.
    pub fn save(&mut self, content: &str) -> Result<PathBuf, NoteError> {
        let path = self.resolve_checked()?;
        match self.write_note(&path, content) {
            Ok(modified) => {
                self.last_write = Some(modified);
                info!(path = %path.display(), bytes = content.len(), "[SAVE]");
                Ok(path)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "[SAVE][ERROR]");
                Err(e)
            }
        }
    }

    fn write_note(&self, path: &Path, content: &str) -> Result<SystemTime, NoteError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(dir)
                .map_err(|e| NoteError::io(NoteOp::CreateDir, dir, e))?;
        }
        self.fs
            .write_string(path, content)
            .map_err(|e| NoteError::io(NoteOp::Write, path, e))?;
        self.fs
            .modified(path)
            .map_err(|e| NoteError::io(NoteOp::Modified, path, e))
    }

    /// Reads the note into the display value. A missing file is an outcome,
    /// not an error.
    pub fn load(&mut self) -> Result<LoadOutcome, NoteError> {
        let path = self.resolve_checked()?;
        if !self.fs.exists(&path) {
            self.set_display(NOT_FOUND_PLACEHOLDER);
            warn!(path = %path.display(), "[LOAD] file not found");
            return Ok(LoadOutcome::NotFound);
        }
        let read = self
            .fs
            .read_bytes(&path)
            .map_err(|e| NoteError::io(NoteOp::Read, &path, e))
            .and_then(|bytes| {
                let text = decode_note(&bytes);
                let modified = self
                    .fs
                    .modified(&path)
                    .map_err(|e| NoteError::io(NoteOp::Modified, &path, e))?;
                Ok((text, modified))
            });
        match read {
            Ok((text, modified)) => {
                self.set_display(text);
                self.last_write = Some(modified);
                if !self.loading_silently {
                    info!(path = %path.display(), "[LOAD]");
                }
                Ok(LoadOutcome::Loaded)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "[LOAD][ERROR]");
                Err(e)
            }
        }
    }

    /// Reloads silently when the file is newer than the last save/load, or when
    /// nothing has been recorded yet. Returns whether a reload happened.
    pub fn try_auto_reload(&mut self) -> Result<bool, NoteError> {
        let path = self.resolve_checked()?;
        if !self.fs.exists(&path) {
            return Ok(false);
        }
        let current = match self.fs.modified(&path) {
            Ok(t) => t,
            Err(e) => {
                let e = NoteError::io(NoteOp::Modified, &path, e);
                error!(path = %path.display(), error = %e, "[AUTO-RELOAD][ERROR]");
                return Err(e);
            }
        };
        let newer = self.last_write.is_none_or(|prev| current > prev);
        if !newer {
            return Ok(false);
        }
        self.loading_silently = true;
        let result = self.load();
        self.loading_silently = false;
        result.map(|outcome| outcome == LoadOutcome::Loaded)
    }

    /// Per-frame poll entry. `now_secs` is any monotonic clock in seconds.
    /// Returns whether the note was reloaded on this tick.
    pub fn tick(&mut self, now_secs: f64) -> bool {
        if !self.auto_reload || now_secs < self.next_poll_secs {
            return false;
        }
        self.next_poll_secs = now_secs + f64::from(self.poll_interval_secs());
        // Errors are logged by try_auto_reload; the next tick simply tries again.
        self.try_auto_reload().unwrap_or(false)
    }

    /// Effective spacing between polls.
    pub fn poll_interval_secs(&self) -> f32 {
        if self.reload_interval_secs.is_finite() {
            self.reload_interval_secs.max(MIN_POLL_INTERVAL_SECS)
        } else {
            MIN_POLL_INTERVAL_SECS
        }
    }

    /// Containing folder of the current note, expanded for a file manager.
    pub fn reveal_dir(&mut self) -> Option<PathBuf> {
        let path = self.resolve_path();
        let expanded = expand_path(&path.to_string_lossy());
        expanded
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    fn set_display(&mut self, text: impl Into<String>) {
        self.display = text.into();
        self.display_revision = self.display_revision.wrapping_add(1);
    }

    pub fn set_override_path(&mut self, raw: impl Into<String>) {
        self.override_path = raw.into();
    }

    pub fn override_path(&self) -> &str {
        &self.override_path
    }

    pub fn override_path_mut(&mut self) -> &mut String {
        &mut self.override_path
    }

    pub fn set_auto_reload(&mut self, enabled: bool) {
        self.auto_reload = enabled;
    }

    pub fn auto_reload(&self) -> bool {
        self.auto_reload
    }

    pub fn set_reload_interval(&mut self, secs: f32) {
        self.reload_interval_secs = secs;
    }

    pub fn next_poll_secs(&self) -> f64 {
        self.next_poll_secs
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn display_revision(&self) -> u64 {
        self.display_revision
    }

    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_write
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub fn writable_dir(&self) -> &Path {
        &self.writable_dir
    }
}

/// Note files are UTF-8, but other editors may add a BOM or save stray bytes in
/// a legacy encoding. Strip the BOM and replace bad sequences with U+FFFD.
fn decode_note(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
