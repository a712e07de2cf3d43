// Directory navigator - current directory, listing and selection

use crate::entry::{Entry, EntryKind, PARENT_MARKER};
use crate::error::{NavigationError, Result};
use crate::io::{basename, join_path, parent_of, FileSystem, LocalFileSystem};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Outcome of a finished picker: the chosen path, or `None` when cancelled.
pub type Selection = Option<PathBuf>;

#[derive(Clone, Copy, Debug)]
pub struct NavigatorOptions {
    /// Keep names starting with `.` in listings.
    pub show_hidden: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self { show_hidden: true }
    }
}

/// What [`Navigator::enter_entry`] did with the entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The entry was a directory and is now the current directory.
    Directory,
    /// The entry is a file; it is selected and left to the caller.
    File(PathBuf),
    /// No entry with that name is listed.
    Ignored,
}

/// Tracks a current directory, its sorted listing and one selected entry.
///
/// Entries are sorted by byte-wise comparison of their on-disk names, so
/// ordering is case-sensitive on every platform. The parent marker is always entry 0.
/// Every mutator either fully succeeds or leaves the state as it was.
pub struct Navigator<F = LocalFileSystem> {
    fs: F,
    options: NavigatorOptions,
    current_directory: PathBuf,
    entries: Vec<Entry>,
    selected_index: usize,
    selected_path: PathBuf,
    pending_input: String,
    is_open: bool,
}

impl Navigator<LocalFileSystem> {
    pub fn local(options: NavigatorOptions) -> Self {
        Self::new(LocalFileSystem::new(), options)
    }
}

impl<F: FileSystem> Navigator<F> {
    pub fn new(fs: F, options: NavigatorOptions) -> Self {
        Self {
            fs,
            options,
            current_directory: PathBuf::new(),
            entries: Vec::new(),
            selected_index: 0,
            selected_path: PathBuf::new(),
            pending_input: String::new(),
            is_open: false,
        }
    }

    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected_index)
    }

    pub fn selected_path(&self) -> &Path {
        &self.selected_path
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// The text field buffer. Edits are not applied until committed.
    pub fn pending_input_mut(&mut self) -> &mut String {
        &mut self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn options(&self) -> NavigatorOptions {
        self.options
    }

    /// Focus `start` and mark the picker active.
    pub fn open(&mut self, start: impl AsRef<Path>) -> Result<()> {
        self.focus_directory(start)?;
        self.is_open = true;
        Ok(())
    }

    /// Make the nearest directory at or above `path` current.
    ///
    /// When `path` names an item directly inside that directory, the item is
    /// selected; otherwise the parent marker is.
    pub fn focus_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let requested = path.as_ref();
        let resolved = self
            .fs
            .resolve_absolute(requested)
            .ok_or_else(|| NavigationError::PathNotFound(requested.to_path_buf()))?;
        let (directory, child) = self.nearest_directory(&resolved)?;
        let entries = self.list(&directory)?;

        let selected = child
            .and_then(|name| position_os(&entries, &name))
            .unwrap_or(0);

        debug!(
            "Focused {} ({} entries)",
            directory.display(),
            entries.len() - 1
        );
        self.current_directory = directory;
        self.entries = entries;
        self.apply_selection(selected);
        Ok(())
    }

    /// Select the entry called `name`. Unknown names are ignored.
    pub fn select_entry(&mut self, name: &str) {
        match self.position(name) {
            Some(index) => self.apply_selection(index),
            None => debug!("Ignoring selection of unlisted entry '{}'", name),
        }
    }

    /// Descend into a directory entry, or select a file entry.
    pub fn enter_entry(&mut self, name: &str) -> Result<Activation> {
        match self.position(name) {
            Some(index) => self.enter_index(index),
            None => Ok(Activation::Ignored),
        }
    }

    /// [`Navigator::enter_entry`] for the entry at `index`.
    pub fn enter_index(&mut self, index: usize) -> Result<Activation> {
        let Some(entry) = self.entries.get(index) else {
            return Ok(Activation::Ignored);
        };
        let target = join_path(&self.current_directory, &entry.os_name);
        if entry.kind == EntryKind::Parent || self.fs.is_directory(&target) {
            self.focus_directory(&target)?;
            Ok(Activation::Directory)
        } else {
            self.apply_selection(index);
            Ok(Activation::File(target))
        }
    }

    /// Treat `text` as a typed path and focus it.
    pub fn commit_input_path(&mut self, text: &str) -> Result<()> {
        self.focus_directory(text)
    }

    /// Focus the parent directory, selecting the directory just left.
    pub fn go_up(&mut self) -> Result<()> {
        let Some(parent) = parent_of(&self.current_directory) else {
            return Ok(());
        };
        let previous = basename(&self.current_directory);
        self.focus_directory(&parent)?;
        if let Some(index) = previous.and_then(|name| position_os(&self.entries, &name)) {
            self.apply_selection(index);
        }
        Ok(())
    }

    /// Re-list the current directory, keeping the selection when it still exists.
    pub fn refresh(&mut self) -> Result<()> {
        let selected = self.selected_entry().map(|entry| entry.os_name.clone());
        let entries = self.list(&self.current_directory)?;
        self.entries = entries;
        let index = selected
            .and_then(|name| position_os(&self.entries, &name))
            .unwrap_or(0);
        self.apply_selection(index);
        Ok(())
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.entries.len() {
            self.apply_selection(index);
        }
    }

    /// Move the selection by `delta`, clamped to the listing.
    pub fn select_delta(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let max = self.entries.len() - 1;
        let index = self.selected_index.saturating_add_signed(delta).min(max);
        self.apply_selection(index);
    }

    /// Finish with the pending input as the chosen path.
    ///
    /// While the input still mirrors the selection, the selected path is
    /// returned as is so names that are not valid UTF-8 survive.
    pub fn complete_selection(&mut self) -> Selection {
        self.is_open = false;
        if self.pending_input == self.selected_path.to_string_lossy() {
            Some(self.selected_path.clone())
        } else {
            Some(PathBuf::from(&self.pending_input))
        }
    }

    /// Finish without a selection.
    pub fn cancel(&mut self) -> Selection {
        self.is_open = false;
        None
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    fn nearest_directory(&self, resolved: &Path) -> Result<(PathBuf, Option<OsString>)> {
        let mut candidate = resolved.to_path_buf();
        let mut child = None;
        while !self.fs.is_directory(&candidate) {
            match parent_of(&candidate) {
                Some(parent) if parent != candidate => {
                    child = basename(&candidate);
                    candidate = parent;
                }
                _ => return Err(NavigationError::PathNotFound(resolved.to_path_buf())),
            }
        }
        Ok((candidate, child))
    }

    fn list(&self, directory: &Path) -> Result<Vec<Entry>> {
        let mut names =
            self.fs
                .list_directory(directory)
                .map_err(|source| NavigationError::ListingDenied {
                    path: directory.to_path_buf(),
                    source,
                })?;
        names.retain(|name| name != "." && name != PARENT_MARKER);
        if !self.options.show_hidden {
            names.retain(|name| !name.as_encoded_bytes().starts_with(b"."));
        }
        names.sort_by(|a, b| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));

        let mut entries = Vec::with_capacity(names.len() + 1);
        entries.push(Entry::parent());
        entries.extend(names.into_iter().map(|name| {
            let kind = if self.fs.is_directory(&join_path(directory, &name)) {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            Entry::new(name, kind)
        }));
        Ok(entries)
    }

    fn apply_selection(&mut self, index: usize) {
        self.selected_index = index;
        self.selected_path = match self.entries.get(index) {
            Some(entry) if entry.kind != EntryKind::Parent => {
                join_path(&self.current_directory, &entry.os_name)
            }
            _ => self.current_directory.clone(),
        };
        self.pending_input = self.selected_path.to_string_lossy().to_string();
    }
}

fn position_os(entries: &[Entry], name: &OsStr) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry.kind != EntryKind::Parent && entry.os_name.as_os_str() == name)
}
