//! Per-entry records produced during a walk

use std::path::{Path, PathBuf};

/// Kind of a visited entry.
///
/// Anything that is not a directory (regular files, unfollowed symlinks,
/// sockets) is listed as a file with its own size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Dir,
    File { size: u64 },
}

/// A visited filesystem entry, produced and formatted one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalNode {
    pub path: PathBuf,
    pub rel_path: PathBuf,
    pub name: String,
    pub kind: NodeKind,
    /// 0 for direct children of the root.
    pub level: usize,
}

impl TraversalNode {
    pub fn new(root: &Path, path: &Path, kind: NodeKind) -> Self {
        let rel_path = relative_path(root, path);
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| rel_path.to_string_lossy().to_string());
        let level = level_of(&rel_path);
        Self {
            path: path.to_path_buf(),
            rel_path,
            name,
            kind,
            level,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir)
    }

    /// Size in bytes, only known for files.
    pub fn size(&self) -> Option<u64> {
        match self.kind {
            NodeKind::File { size } => Some(size),
            NodeKind::Dir => None,
        }
    }
}

/// Path of `path` below `root`; the walk always yields paths joined onto the root.
pub fn relative_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Number of directory boundaries between the root and an entry.
pub fn level_of(rel_path: &Path) -> usize {
    rel_path.components().count().saturating_sub(1)
}
