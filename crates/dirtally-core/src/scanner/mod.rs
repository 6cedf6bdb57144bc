/// Scanner module — single-threaded recursive directory walker.
///
/// [`Walk`] wraps a `jwalk` iterator configured for serial, sorted
/// traversal and turns raw directory entries into [`FileEntry`] records.
/// Every entry is checked against the [`ExclusionSet`] on its full relative
/// path before it is yielded; when `prune_excluded` is set the walker also
/// refuses to descend into excluded directories, which changes the amount of
/// I/O but never the output.
pub mod exclusion;
pub mod progress;

pub use exclusion::{ExclusionSet, DEFAULT_EXCLUDED};
pub use progress::{NoProgress, ProgressSink, ScanProgress, PROGRESS_INTERVAL};

use crate::error::ScanError;
use crate::model::FileEntry;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Parameters for a single walk.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory to walk. Must exist and be a directory.
    pub root: PathBuf,

    /// Names filtered out of every result.
    pub exclusions: ExclusionSet,

    /// Skip reading the contents of excluded directories.
    pub prune_excluded: bool,
}

impl ScanConfig {
    /// Config for `root` with the default exclusion set and pruning enabled.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclusions: ExclusionSet::default(),
            prune_excluded: true,
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune_excluded = prune;
        self
    }
}

/// Lazy sequence of the files and directories under a root.
///
/// Yields `Err(ScanError::Access { .. })` for entries that could not be
/// inspected and continues with the next entry. A directory whose children
/// could not be read is yielded first, followed by an `Access` error for it.
/// The root itself is never yielded.
pub struct Walk {
    root: PathBuf,
    exclusions: Arc<ExclusionSet>,
    inner: jwalk::DirEntryIter<((), ())>,
    /// Error held back until the directory entry that caused it is consumed.
    pending: Option<ScanError>,
}

impl Walk {
    /// Validate the root and prepare the traversal.
    ///
    /// Fails with [`ScanError::RootNotFound`] or [`ScanError::RootNotDirectory`]
    /// before any entry is read.
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        let root = config.root.clone();
        let meta = match std::fs::metadata(&root) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ScanError::RootNotFound(root));
            }
            Err(source) => return Err(ScanError::Io { path: root, source }),
        };
        if !meta.is_dir() {
            return Err(ScanError::RootNotDirectory(root));
        }

        info!("Starting scan of {}", root.display());
        debug!(
            "Excluding {:?} (pruning {})",
            config.exclusions.iter().collect::<Vec<_>>(),
            if config.prune_excluded { "on" } else { "off" }
        );

        let exclusions = Arc::new(config.exclusions.clone());

        let mut walker = jwalk::WalkDir::new(&root)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false)
            .parallelism(jwalk::Parallelism::Serial);

        if config.prune_excluded {
            let prune = Arc::clone(&exclusions);
            walker = walker.process_read_dir(move |_depth, _dir, _state, children| {
                for child in children.iter_mut().flatten() {
                    if child.file_type.is_dir() && prune.contains(&child.file_name) {
                        child.read_children_path = None;
                    }
                }
            });
        }

        Ok(Self {
            root,
            exclusions,
            inner: walker.into_iter(),
            pending: None,
        })
    }

    /// The validated scan root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative_to_root<'p>(&self, path: &'p Path) -> Option<&'p Path> {
        path.strip_prefix(&self.root)
            .ok()
            .filter(|rel| !rel.as_os_str().is_empty())
    }

    fn access_error(path: PathBuf, err: impl std::fmt::Display) -> ScanError {
        ScanError::Access {
            path,
            message: err.to_string(),
        }
    }
}

impl Iterator for Walk {
    type Item = Result<FileEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }

        loop {
            let mut entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    let excluded = self
                        .relative_to_root(&path)
                        .is_some_and(|rel| self.exclusions.matches_path(rel));
                    if excluded {
                        continue;
                    }
                    return Some(Err(Self::access_error(path, err)));
                }
            };

            let path = entry.path();

            // jwalk reports a failed directory read on the entry itself.
            let read_error = entry
                .read_children_error
                .take()
                .map(|err| Self::access_error(path.clone(), err));

            // Depth 0 is the root, already validated in `new`.
            if entry.depth == 0 {
                if let Some(err) = read_error {
                    return Some(Err(err));
                }
                continue;
            }

            let Some(relative) = self.relative_to_root(&path).map(Path::to_path_buf) else {
                continue;
            };

            if self.exclusions.matches_path(&relative) {
                trace!("Excluded {}", relative.display());
                continue;
            }

            if entry.file_type.is_dir() {
                self.pending = read_error;
                return Some(Ok(FileEntry::new_dir(path, relative)));
            }

            // Follows symlinks: a link counts as whatever it points at.
            let meta = match std::fs::metadata(&path) {
                Ok(meta) => meta,
                Err(err) => return Some(Err(Self::access_error(path, err))),
            };

            if meta.is_dir() {
                return Some(Ok(FileEntry::new_dir(path, relative)));
            }
            if meta.is_file() {
                return Some(Ok(FileEntry::new_file(path, relative, meta.len())));
            }

            trace!("Skipping special file {}", relative.display());
        }
    }
}

/// Start a walk over `config.root`.
pub fn walk(config: &ScanConfig) -> Result<Walk, ScanError> {
    Walk::new(config)
}
