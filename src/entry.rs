use std::ffi::OsString;

/// Synthetic first entry that stands for the parent directory.
pub const PARENT_MARKER: &str = "..";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

/// One row of a directory listing.
///
/// `os_name` is the name as stored on disk and is what paths are built from;
/// `name` is its lossy UTF-8 form for display and lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub os_name: OsString,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(os_name: OsString, kind: EntryKind) -> Self {
        Self {
            name: os_name.to_string_lossy().into_owned(),
            os_name,
            kind,
        }
    }

    pub fn parent() -> Self {
        Self::new(OsString::from(PARENT_MARKER), EntryKind::Parent)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Parent | EntryKind::Directory)
    }

    pub fn extension(&self) -> String {
        match self.kind {
            EntryKind::File => self
                .name
                .rsplit_once('.')
                .filter(|(stem, _)| !stem.is_empty())
                .map(|(_, ext)| ext.to_lowercase())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    pub fn get_icon(&self) -> &str {
        match self.kind {
            EntryKind::Parent => "\u{2b06}",
            EntryKind::Directory => "\u{1f4c1}",
            EntryKind::File => match self.extension().as_str() {
                "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => "\u{1f5bc}",
                "mp4" | "mkv" | "mov" | "avi" | "webm" => "\u{1f39e}",
                "mp3" | "wav" | "flac" | "ogg" | "m4a" => "\u{1f3b5}",
                "zip" | "tar" | "gz" | "7z" | "rar" | "xz" | "bz2" => "\u{1f4e6}",
                _ => "\u{1f4c4}",
            },
        }
    }

    pub fn display_name(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}/", self.name),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> Entry {
        Entry::new(OsString::from(name), EntryKind::File)
    }

    #[test]
    fn test_extension() {
        assert_eq!(file("photo.JPG").extension(), "jpg");
        assert_eq!(file("archive.tar.gz").extension(), "gz");
        assert_eq!(file(".bashrc").extension(), "");
        assert_eq!(file("README").extension(), "");
        assert_eq!(Entry::parent().extension(), "");
    }

    #[test]
    fn test_display_name_marks_directories() {
        let dir = Entry::new(OsString::from("sub"), EntryKind::Directory);
        assert_eq!(dir.display_name(), "sub/");
        assert_eq!(Entry::parent().display_name(), "..");
        assert!(Entry::parent().is_dir());
        assert!(!file("a.txt").is_dir());
    }
}
