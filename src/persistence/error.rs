use std::path::PathBuf;

use thiserror::Error;

/// Which file operation failed; carried in [`NoteError::Io`] and in log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOp {
    CreateDir,
    Write,
    Read,
    Modified,
}

impl std::fmt::Display for NoteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NoteOp::CreateDir => "create directory",
            NoteOp::Write => "write",
            NoteOp::Read => "read",
            NoteOp::Modified => "read modification time",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("{op} failed for {}: {source}", path.display())]
    Io {
        op: NoteOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The store was used before `initialize` and no override path was given.
    #[error("note path is empty (store not initialized)")]
    EmptyPath,
}

impl NoteError {
    pub(crate) fn io(op: NoteOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NoteError::Io { op, path: path.into(), source }
    }
}
