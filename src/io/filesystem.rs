// Filesystem access used by the directory navigator

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// The filesystem queries the navigator depends on.
///
/// All calls are synchronous and expected to be local and fast.
pub trait FileSystem {
    /// Names of the items directly inside `path`, in no particular order.
    ///
    /// Names are returned exactly as the OS reports them, valid UTF-8 or not.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Whether `path` currently names a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Absolute, `~`-expanded and lexically normalized form of `path`.
    ///
    /// Returns `None` when a relative path cannot be anchored.
    fn resolve_absolute(&self, path: &Path) -> Option<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Clone, Debug)]
pub struct LocalFileSystem {
    home: Option<PathBuf>,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        let home = directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self { home }
    }

    /// Uses `home` for `~` expansion instead of the user's home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    fn list_directory(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn resolve_absolute(&self, path: &Path) -> Option<PathBuf> {
        let expanded = expand_tilde(path, self.home.as_deref());
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            env::current_dir().ok()?.join(expanded)
        };
        Some(normalize(&absolute))
    }
}

pub fn join_path(dir: &Path, name: impl AsRef<OsStr>) -> PathBuf {
    dir.join(name.as_ref())
}

pub fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent().map(Path::to_path_buf)
}

pub fn basename(path: &Path) -> Option<OsString> {
    path.file_name().map(OsStr::to_os_string)
}

/// Replace a leading `~` component with `home`.
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home.to_path_buf(),
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Lexically remove `.` and `..` components from an absolute path.
///
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_removes_dots() {
        assert_eq!(
            normalize(Path::new("/home/user/./docs/../music")),
            PathBuf::from("/home/user/music")
        );
    }

    #[test]
    fn test_normalize_parent_of_root_is_root() {
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/../../tmp")), PathBuf::from("/tmp"));
    }

    #[test]
    fn test_expand_tilde() {
        let home = Path::new("/home/user");
        assert_eq!(expand_tilde(Path::new("~"), Some(home)), PathBuf::from("/home/user"));
        assert_eq!(
            expand_tilde(Path::new("~/docs"), Some(home)),
            PathBuf::from("/home/user/docs")
        );
        assert_eq!(expand_tilde(Path::new("~docs"), Some(home)), PathBuf::from("~docs"));
        assert_eq!(expand_tilde(Path::new("~/docs"), None), PathBuf::from("~/docs"));
    }

    #[test]
    fn test_path_helpers() {
        let dir = Path::new("/home/user");
        assert_eq!(join_path(dir, "a.txt"), PathBuf::from("/home/user/a.txt"));
        assert_eq!(parent_of(dir), Some(PathBuf::from("/home")));
        assert_eq!(parent_of(Path::new("/")), None);
        assert_eq!(basename(dir), Some(OsString::from("user")));
        assert_eq!(basename(Path::new("/")), None);
    }

    #[test]
    fn test_local_resolve_expands_home() {
        let fs = LocalFileSystem::with_home("/home/user");
        assert_eq!(
            fs.resolve_absolute(Path::new("~/docs/../music")),
            Some(PathBuf::from("/home/user/music"))
        );
    }

    #[test]
    fn test_local_resolve_relative_uses_working_dir() {
        let fs = LocalFileSystem::new();
        let cwd = env::current_dir().unwrap();
        assert_eq!(fs.resolve_absolute(Path::new(".")), Some(normalize(&cwd)));
    }

    #[test]
    fn test_local_list_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();

        let local = LocalFileSystem::new();
        let mut names = local.list_directory(temp.path()).unwrap();
        names.sort();
        assert_eq!(names, vec![OsString::from("a"), OsString::from("b.txt")]);
        assert!(local.is_directory(&temp.path().join("a")));
        assert!(!local.is_directory(&temp.path().join("b.txt")));
    }

    #[test]
    fn test_local_list_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let local = LocalFileSystem::new();
        assert!(local.list_directory(&temp.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_local_list_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9");
        fs::create_dir(temp.path().join(raw)).unwrap();

        let names = LocalFileSystem::new().list_directory(temp.path()).unwrap();
        assert_eq!(names, vec![raw.to_os_string()]);
        assert!(join_path(temp.path(), &names[0]).is_dir());
    }
}
