use std::path::{Component, Path, PathBuf};

/// Application folder name under the platform data directory.
pub const APP_DIR_NAME: &str = "note_keeper";

/// Platform application-private data directory (`~/.local/share/note_keeper`
/// on Linux, `~/Library/Application Support/note_keeper` on macOS).
/// Falls back to the working directory when the platform reports none.
pub fn default_writable_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Cleans up a user-typed path for display in a file manager: trims blanks and
/// quotes, expands a leading `~`, and makes it absolute. Never fails; if the
/// path cannot be made absolute the trimmed input is returned.
pub fn expand_path(raw: &str) -> PathBuf {
    expand_path_with_home(raw, dirs::home_dir().as_deref())
}

pub fn expand_path_with_home(raw: &str, home: Option<&Path>) -> PathBuf {
    if raw.trim().is_empty() {
        return PathBuf::from(raw);
    }
    let trimmed = raw.trim().trim_matches(|c: char| c == '"' || c == '\'');

    let mut path = PathBuf::from(trimmed);
    if let (Some(rest), Some(home)) = (trimmed.strip_prefix('~'), home) {
        let rest = rest.trim_start_matches(['/', '\\']);
        path = if rest.is_empty() { home.to_path_buf() } else { home.join(rest) };
    }

    match std::path::absolute(&path) {
        Ok(abs) => normalize_lexically(&abs),
        Err(_) => path,
    }
}

/// Drops `.` segments and folds `..` into its parent without touching the disk.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(comp);
                }
            }
            other => out.push(other),
        }
    }
    out
}
