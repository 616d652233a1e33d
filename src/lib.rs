//! rec-traverse - list a directory tree with file sizes, to the console or an HTML page

pub mod error;
pub mod logging;
pub mod output;
pub mod run;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{HTML_OUTPUT_FILE, OutputConfig, OutputMode, Sink, TreeFormatter};
pub use run::{RunConfig, RunReport, render, run};
pub use tree::{ErrorPolicy, NodeKind, TraversalNode, TreeOutput, TreeWalker, WalkerConfig};
