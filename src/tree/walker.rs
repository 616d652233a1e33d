//! TreeWalker - pre-order walk that streams one node at a time to an output

use std::io;
use std::path::Path;

use ignore::{DirEntry, Walk, WalkBuilder};
use tracing::{debug, error};

use crate::error::TreeError;

use super::config::{ErrorPolicy, WalkerConfig};
use super::node::{NodeKind, TraversalNode};

/// Callback for streaming output - receives each visited node in pre-order.
pub trait TreeOutput {
    fn output_node(&mut self, node: &TraversalNode) -> io::Result<()>;
}

/// Totals for a finished walk.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub dir_count: usize,
    pub file_count: usize,
    /// Errors that were skipped over; always empty under `ErrorPolicy::FailFast`.
    pub errors: Vec<TreeError>,
}

impl WalkSummary {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tree walker that outputs directly without building the tree in memory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Depth handed to the walk primitive. The root sits at walk depth 0, so a
    /// level-N entry sits at N + 1 and directories at the cutoff are never read.
    pub fn walk_depth(&self) -> Option<usize> {
        self.config.max_depth.map(|max| max + 1)
    }

    fn build_walk(&self, root: &Path) -> Walk {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .max_depth(self.walk_depth())
            .sort_by_file_name(|a, b| a.cmp(b));
        builder.build()
    }

    /// Walk `root` and stream every entry below it to `output`.
    /// The root itself is not emitted.
    pub fn walk<O: TreeOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary, TreeError> {
        debug!(
            root = %root.display(),
            max_depth = ?self.config.max_depth,
            policy = ?self.config.error_policy,
            "walking tree"
        );

        let mut summary = WalkSummary::default();

        for result in self.build_walk(root) {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    self.recover(TreeError::access(&err, root), &mut summary)?;
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let kind = match entry_kind(&entry) {
                Ok(kind) => kind,
                Err(err) => {
                    self.recover(TreeError::metadata(&err, entry.path()), &mut summary)?;
                    continue;
                }
            };

            let node = TraversalNode::new(root, entry.path(), kind);
            output.output_node(&node)?;

            if node.is_dir() {
                summary.dir_count += 1;
            } else {
                summary.file_count += 1;
            }
        }

        debug!(
            dirs = summary.dir_count,
            files = summary.file_count,
            errors = summary.errors.len(),
            "walk finished"
        );
        Ok(summary)
    }

    /// Log an entry error, then stop or record it depending on the policy.
    fn recover(&self, err: TreeError, summary: &mut WalkSummary) -> Result<(), TreeError> {
        error!("{}", err);
        match self.config.error_policy {
            ErrorPolicy::FailFast => Err(err),
            ErrorPolicy::KeepGoing => {
                summary.errors.push(err);
                Ok(())
            }
        }
    }
}

fn entry_kind(entry: &DirEntry) -> Result<NodeKind, ignore::Error> {
    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return Ok(NodeKind::Dir);
    }
    let meta = entry.metadata()?;
    Ok(NodeKind::File { size: meta.len() })
}
