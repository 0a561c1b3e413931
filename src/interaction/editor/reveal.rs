//! "Reveal containing folder" editor action.
//! Built with the `editor` feature; without it the request is only logged.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::interaction::session::note_session::NoteCommand;
use crate::persistence::NoteStore;

/// What the last reveal request resolved to.
#[derive(Resource, Debug, Default)]
pub struct RevealStatus {
    pub requests: u32,
    pub last_dir: Option<PathBuf>,
}

pub fn handle_reveal_requests(
    mut events: EventReader<NoteCommand>,
    mut store: ResMut<NoteStore>,
    mut status: ResMut<RevealStatus>,
) {
    // Drain every pending command so one request never reveals twice.
    let requested = events
        .read()
        .filter(|cmd| **cmd == NoteCommand::RevealFolder)
        .count();
    if requested == 0 {
        return;
    }
    status.requests += 1;
    let Some(dir) = store.reveal_dir() else {
        warn!("[REVEAL] note path has no containing folder");
        return;
    };
    status.last_dir = Some(dir.clone());
    #[cfg(feature = "editor")]
    {
        match file_manager::reveal(&dir) {
            Ok(()) => info!(dir = %dir.display(), "[REVEAL]"),
            Err(e) => error!(dir = %dir.display(), error = %e, "[REVEAL][ERROR]"),
        }
    }
    #[cfg(not(feature = "editor"))]
    {
        warn!(dir = %dir.display(), "[REVEAL] built without the `editor` feature");
    }
}

#[cfg(feature = "editor")]
mod file_manager {
    use std::io;
    use std::path::Path;
    use std::process::Command;

    /// Opens `dir` in the platform file manager without waiting for it.
    pub fn reveal(dir: &Path) -> io::Result<()> {
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist yet (save the note first)", dir.display()),
            ));
        }
        let mut cmd = opener();
        cmd.arg(dir);
        spawn_detached(&mut cmd).map(|_| ())
    }

    /// Starts `cmd` and reaps it on a background thread so no zombie is left.
    pub(super) fn spawn_detached(cmd: &mut Command) -> io::Result<std::thread::JoinHandle<()>> {
        let mut child = cmd.spawn()?;
        Ok(std::thread::spawn(move || {
            let _ = child.wait();
        }))
    }

    #[cfg(target_os = "macos")]
    fn opener() -> Command {
        Command::new("open")
    }

    #[cfg(target_os = "windows")]
    fn opener() -> Command {
        Command::new("explorer")
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn opener() -> Command {
        Command::new("xdg-open")
    }

}
