//! Filesystem primitives the note store depends on. `StdFs` is the real disk.

use std::io;
use std::path::Path;
use std::time::SystemTime;

pub trait NoteFs: Send + Sync + 'static {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;
    /// Replaces the whole file with `contents`.
    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()>;
    /// Raw file bytes; decoding is the store's job.
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl NoteFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        std::fs::create_dir_all(dir)
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents.as_bytes())
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }
}
