//! In-memory `NoteFs` for tests. Modification times come from a logical clock
//! so change detection is deterministic; clones share state, which lets a test
//! play the part of an external editor.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::fs::NoteFs;

#[derive(Debug)]
struct MemoryFile {
    contents: Vec<u8>,
    modified: SystemTime,
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, MemoryFile>,
    dirs: HashSet<PathBuf>,
    clock_secs: u64,
    fail_writes: bool,
    fail_modified: bool,
    reads: usize,
}

impl MemoryState {
    fn tick(&mut self) -> SystemTime {
        self.clock_secs += 1;
        UNIX_EPOCH + Duration::from_secs(self.clock_secs)
    }

    fn parent_present(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(p) if p.as_os_str().is_empty() => true,
            Some(p) => self.dirs.contains(p),
        }
    }
}

/// In-memory filesystem. Each write advances the clock by one second.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A panicked holder cannot leave the map half-written; keep going.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Writes `contents` as another process would: parents are created and the
    /// modification time moves forward.
    pub fn external_write(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut st = self.lock();
        let mut dir = path.parent();
        while let Some(d) = dir {
            if d.as_os_str().is_empty() {
                break;
            }
            st.dirs.insert(d.to_path_buf());
            dir = d.parent();
        }
        let modified = st.tick();
        st.files.insert(
            path.to_path_buf(),
            MemoryFile { contents: contents.as_ref().to_vec(), modified },
        );
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock()
            .files
            .get(path.as_ref())
            .map(|f| String::from_utf8_lossy(&f.contents).into_owned())
    }

    pub fn has_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.lock().dirs.contains(dir.as_ref())
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    pub fn set_fail_modified(&self, fail: bool) {
        self.lock().fail_modified = fail;
    }

    /// Number of successful `read_bytes` calls so far.
    pub fn reads(&self) -> usize {
        self.lock().reads
    }
}

impl NoteFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        let mut st = self.lock();
        if st.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only memory fs"));
        }
        let mut cur = Some(dir);
        while let Some(d) = cur {
            if d.as_os_str().is_empty() {
                break;
            }
            st.dirs.insert(d.to_path_buf());
            cur = d.parent();
        }
        Ok(())
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut st = self.lock();
        if st.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only memory fs"));
        }
        if !st.parent_present(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("missing parent directory for {}", path.display()),
            ));
        }
        let modified = st.tick();
        st.files.insert(
            path.to_path_buf(),
            MemoryFile { contents: AsRef::<[u8]>::as_ref(contents).to_vec(), modified },
        );
        Ok(())
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut st = self.lock();
        let contents = st
            .files
            .get(path)
            .map(|f| f.contents.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;
        st.reads += 1;
        Ok(contents)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        let st = self.lock();
        if st.fail_modified {
            return Err(io::Error::other("metadata unavailable"));
        }
        st.files
            .get(path)
            .map(|f| f.modified)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_needs_parent_dir() {
        let fs = MemoryFs::new();
        let p = Path::new("/notes/a.txt");
        assert!(fs.write_string(p, "x").is_err());
        fs.create_dir_all(Path::new("/notes")).unwrap();
        fs.write_string(p, "x").unwrap();
        assert_eq!(fs.contents(p).as_deref(), Some("x"));
    }

    #[test]
    fn clock_advances_per_write() {
        let fs = MemoryFs::new();
        let p = Path::new("a.txt");
        fs.write_string(p, "1").unwrap();
        let first = fs.modified(p).unwrap();
        fs.external_write(p, "2");
        assert!(fs.modified(p).unwrap() > first);
    }

    #[test]
    fn raw_bytes_survive() {
        let fs = MemoryFs::new();
        fs.external_write("/n.txt", b"caf\xe9");
        assert_eq!(fs.read_bytes(Path::new("/n.txt")).unwrap(), b"caf\xe9");
        assert_eq!(fs.reads(), 1);
    }
}
