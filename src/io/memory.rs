// In-memory filesystem for navigator tests

use super::filesystem::{normalize, FileSystem};
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Directories map to the names they contain; any listed name without its own
/// directory entry is a file.
#[derive(Default)]
pub struct MemoryFileSystem {
    dirs: BTreeMap<PathBuf, Vec<String>>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        let mut fs = Self::default();
        fs.dirs.insert(PathBuf::from("/"), Vec::new());
        fs
    }

    /// Adds a directory and every missing ancestor.
    pub fn dir(mut self, path: &str) -> Self {
        self.add_dir(Path::new(path));
        self
    }

    pub fn file(mut self, path: &str) -> Self {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
            self.add_child(parent, path);
        }
        self
    }

    pub fn deny(mut self, path: &str) -> Self {
        self.denied.insert(PathBuf::from(path));
        self
    }

    /// A filesystem whose root is not reported as a directory.
    pub fn rootless() -> Self {
        Self::default()
    }

    fn add_dir(&mut self, path: &Path) {
        if self.dirs.contains_key(path) {
            return;
        }
        self.dirs.insert(path.to_path_buf(), Vec::new());
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
            self.add_child(parent, path);
        }
    }

    fn add_child(&mut self, parent: &Path, child: &Path) {
        let Some(name) = child.file_name() else {
            return;
        };
        let name = name.to_string_lossy().to_string();
        if let Some(names) = self.dirs.get_mut(parent) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_directory(&self, path: &Path) -> io::Result<Vec<OsString>> {
        if self.denied.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        self.dirs
            .get(path)
            .map(|names| names.iter().map(OsString::from).collect())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not found"))
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.dirs.contains_key(path)
    }

    fn resolve_absolute(&self, path: &Path) -> Option<PathBuf> {
        Some(normalize(&Path::new("/").join(path)))
    }
}
