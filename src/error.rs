//! Error types for tree listing

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can stop (or, with keep-going, taint) a listing run.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("error creating HTML file {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("error accessing {}: {cause}", .path.display())]
    Access { path: PathBuf, cause: String },

    #[error("unable to get info for {}: {cause}", .path.display())]
    Metadata { path: PathBuf, cause: String },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),

    #[error("{} could not be read", entry_count(.0.len()))]
    Incomplete(Vec<TreeError>),
}

impl TreeError {
    /// Build an access error from a walk error, falling back to `fallback`
    /// when the walk error does not carry its own path.
    pub(crate) fn access(err: &ignore::Error, fallback: &Path) -> Self {
        let (path, cause) = split_walk_error(err);
        TreeError::Access {
            path: path.unwrap_or(fallback).to_path_buf(),
            cause: cause_text(cause),
        }
    }

    pub(crate) fn metadata(err: &ignore::Error, path: &Path) -> Self {
        let (_, cause) = split_walk_error(err);
        TreeError::Metadata {
            path: path.to_path_buf(),
            cause: cause_text(cause),
        }
    }

    /// Path of the entry that failed, if the error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TreeError::CreateOutput { path, .. }
            | TreeError::Access { path, .. }
            | TreeError::Metadata { path, .. } => Some(path),
            TreeError::Write(_) | TreeError::Incomplete(_) => None,
        }
    }
}

fn entry_count(n: usize) -> String {
    match n {
        1 => "1 entry".to_string(),
        n => format!("{n} entries"),
    }
}

/// Peel the path and depth wrappers off a walk error so the path is not
/// repeated in the rendered message.
fn split_walk_error(err: &ignore::Error) -> (Option<&Path>, &ignore::Error) {
    match err {
        ignore::Error::WithPath { path, err } => {
            let (inner_path, cause) = split_walk_error(err);
            (inner_path.or(Some(path.as_path())), cause)
        }
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            split_walk_error(err)
        }
        ignore::Error::Loop { child, .. } => (Some(child.as_path()), err),
        _ => (None, err),
    }
}

/// Render the OS-level cause. Walk errors arrive as an I/O error wrapping the
/// walk library's own error, which repeats the path.
fn cause_text(err: &ignore::Error) -> String {
    if let ignore::Error::Io(io) = err {
        if let Some(inner) = io.get_ref().and_then(|e| e.source()) {
            return inner.to_string();
        }
    }
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_error_uses_embedded_path() {
        let inner = ignore::Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = ignore::Error::WithPath {
            path: PathBuf::from("root/missing"),
            err: Box::new(inner),
        };

        let access = TreeError::access(&err, Path::new("root"));
        assert_eq!(access.path(), Some(Path::new("root/missing")));
        assert_eq!(access.to_string(), "error accessing root/missing: gone");
    }

    #[test]
    fn test_access_error_falls_back_to_given_path() {
        let err = ignore::Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let access = TreeError::access(&err, Path::new("root/locked"));
        assert_eq!(access.path(), Some(Path::new("root/locked")));
        assert!(access.to_string().ends_with("denied"));
    }

    #[test]
    fn test_incomplete_counts_errors() {
        let err = TreeError::Incomplete(vec![
            TreeError::Write(io::Error::other("a")),
            TreeError::Write(io::Error::other("b")),
        ]);
        assert_eq!(err.to_string(), "2 entries could not be read");
        assert!(err.path().is_none());
    }

    #[test]
    fn test_incomplete_single_error_is_singular() {
        let err = TreeError::Incomplete(vec![TreeError::Write(io::Error::other("a"))]);
        assert_eq!(err.to_string(), "1 entry could not be read");
    }
}
