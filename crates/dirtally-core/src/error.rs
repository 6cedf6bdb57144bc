/// Errors raised while walking a directory tree.
///
/// Root-level variants are fatal and returned from [`Walk::new`]. `Access`
/// is per-entry: the walker yields it in place of the unreadable entry and
/// keeps going.
///
/// [`Walk::new`]: crate::scanner::Walk::new
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("scan root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The scan root exists but is a file, not a directory.
    #[error("scan root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    /// A single entry could not be read (permission denied, broken symlink).
    #[error("cannot access {}: {message}", path.display())]
    Access { path: PathBuf, message: String },

    /// Any other I/O failure while inspecting the root.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// `true` for errors that only affect one entry and allow the walk to continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Access { .. })
    }

    /// Path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootNotFound(p) | Self::RootNotDirectory(p) => p,
            Self::Access { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_errors_are_recoverable() {
        let err = ScanError::Access {
            path: PathBuf::from("a/b"),
            message: "permission denied".into(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.path(), std::path::Path::new("a/b"));
    }

    #[test]
    fn root_errors_are_fatal() {
        assert!(!ScanError::RootNotFound(PathBuf::from("nope")).is_recoverable());
        assert!(!ScanError::RootNotDirectory(PathBuf::from("f.txt")).is_recoverable());
    }

    #[test]
    fn root_not_found_message_names_path() {
        let msg = ScanError::RootNotFound(PathBuf::from("missing-dir")).to_string();
        assert!(msg.contains("missing-dir"), "got: {msg}");
    }
}
