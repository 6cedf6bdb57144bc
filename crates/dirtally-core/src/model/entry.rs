/// A single filesystem object produced by the walker.
///
/// Entries carry both the absolute path (for metadata lookups) and the path
/// relative to the scan root (for grouping and display). Extensions are
/// normalised once at construction so aggregators never re-lowercase.
use compact_str::CompactString;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Extension key used for files with no extension.
pub const NO_EXTENSION: &str = "(no extension)";

/// Top-level directory key used for files directly under the scan root.
pub const ROOT_KEY: &str = "(root)";

/// Whether an entry is a regular file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One visited file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute (root-joined) path.
    pub path: PathBuf,

    /// Path relative to the scan root. Never empty; the root itself is not an entry.
    pub relative: PathBuf,

    pub kind: EntryKind,

    /// Logical size in bytes. Always 0 for directories.
    pub size: u64,

    /// Lower-cased extension including the leading dot, e.g. `".png"`.
    /// `None` for directories and for files without an extension.
    pub extension: Option<CompactString>,
}

impl FileEntry {
    /// Create a file entry, deriving the extension from the file name.
    pub fn new_file(path: PathBuf, relative: PathBuf, size: u64) -> Self {
        let extension = relative.file_name().and_then(extension_of);
        Self {
            path,
            relative,
            kind: EntryKind::File,
            size,
            extension,
        }
    }

    /// Create a directory entry.
    pub fn new_dir(path: PathBuf, relative: PathBuf) -> Self {
        Self {
            path,
            relative,
            kind: EntryKind::Directory,
            size: 0,
            extension: None,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Final path component, lossily converted for display.
    pub fn name(&self) -> CompactString {
        self.relative
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Key for the by-extension mapping: the extension, or [`NO_EXTENSION`].
    pub fn extension_key(&self) -> CompactString {
        self.extension
            .clone()
            .unwrap_or_else(|| CompactString::const_new(NO_EXTENSION))
    }

    /// Key for the by-directory mapping. See [`top_level_key`].
    pub fn top_level_key(&self) -> CompactString {
        top_level_key(&self.relative)
    }
}

/// Lower-cased extension of a file name with its leading dot.
///
/// Follows the usual "last dot" rule: `archive.tar.gz` → `.gz`. Dot-files
/// (`.bashrc`) and names ending in a bare dot (`file.`) have no extension.
pub fn extension_of(name: &OsStr) -> Option<CompactString> {
    let ext = Path::new(name).extension()?;
    if ext.is_empty() {
        return None;
    }
    let lossy = ext.to_string_lossy();
    let mut key = CompactString::with_capacity(lossy.len() + 1);
    key.push('.');
    for ch in lossy.chars() {
        key.extend(ch.to_lowercase());
    }
    Some(key)
}

/// First component of `relative` when it has more than one component,
/// otherwise [`ROOT_KEY`].
pub fn top_level_key(relative: &Path) -> CompactString {
    let mut components = relative
        .components()
        .filter(|c| matches!(c, Component::Normal(_)));
    match (components.next(), components.next()) {
        (Some(Component::Normal(first)), Some(_)) => CompactString::new(first.to_string_lossy()),
        _ => CompactString::const_new(ROOT_KEY),
    }
}
