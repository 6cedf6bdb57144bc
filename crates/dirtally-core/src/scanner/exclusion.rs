/// Directory-name exclusion set.
///
/// An entry is excluded when any component of its path relative to the scan
/// root equals one of the names. The check runs on every entry the walker
/// sees, so correctness does not depend on subtree pruning.
use compact_str::CompactString;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Names excluded by default: VCS metadata, dependency caches, editor state.
pub const DEFAULT_EXCLUDED: &[&str] = &[".git", "node_modules", "__pycache__", ".DS_Store", ".vscode"];

/// Set of path-component names filtered out of every walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<CompactString>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::from_names(DEFAULT_EXCLUDED.iter().copied())
    }
}

impl ExclusionSet {
    /// A set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| CompactString::new(n.as_ref())).collect(),
        }
    }

    /// Exact, case-sensitive match of a single path component.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// `true` if any normal component of `relative` is excluded.
    pub fn matches_path(&self, relative: &Path) -> bool {
        if self.names.is_empty() {
            return false;
        }
        relative.components().any(|c| match c {
            Component::Normal(name) => self.contains(name),
            _ => false,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
