//! One listing run: open the destination, print the root and the tree, close up.

use std::io::Write;
use std::path::PathBuf;

use termcolor::WriteColor;
use tracing::debug;

use crate::error::TreeError;
use crate::output::{OutputConfig, Sink, TreeFormatter, write_closing, write_preamble};
use crate::tree::{TreeWalker, WalkSummary, WalkerConfig};

/// Everything a run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root exactly as given; it is printed verbatim.
    pub root: PathBuf,
    pub walker: WalkerConfig,
    pub output: OutputConfig,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            walker: WalkerConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_walker(mut self, walker: WalkerConfig) -> Self {
        self.walker = walker;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Label used for the first line and the HTML heading.
    pub fn root_label(&self) -> String {
        self.root.display().to_string()
    }
}

/// Outcome of a run that reached the end of the walk.
#[derive(Debug)]
pub struct RunReport {
    pub dir_count: usize,
    pub file_count: usize,
    /// Entries skipped under the keep-going policy.
    pub errors: Vec<TreeError>,
    /// Set when an HTML file was written and closed.
    pub html_file: Option<PathBuf>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn skipped entries into an error, keeping a clean report as is.
    pub fn check(self) -> Result<Self, TreeError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(TreeError::Incomplete(self.errors))
        }
    }
}

/// Run a listing to the destination named by `config.output`.
///
/// The output file is flushed and closed before this returns, on success and
/// on error alike.
pub fn run(config: &RunConfig) -> Result<RunReport, TreeError> {
    let mut sink = Sink::open(&config.output)?;
    let summary = render(config, &mut sink)?;
    sink.flush()?;
    drop(sink);

    Ok(RunReport {
        dir_count: summary.dir_count,
        file_count: summary.file_count,
        errors: summary.errors,
        html_file: config
            .output
            .is_html()
            .then(|| config.output.html_path.clone()),
    })
}

/// Write the full document for `config` to `out`: HTML preamble when in HTML
/// mode, the root line, every tree line, and the closing markup.
///
/// A fail-fast walk error returns early and leaves the document unclosed.
pub fn render<W: WriteColor>(config: &RunConfig, out: &mut W) -> Result<WalkSummary, TreeError> {
    let label = config.root_label();
    let html = config.output.is_html();
    debug!(root = %label, html, "starting run");

    if html {
        write_preamble(out, &label)?;
    }

    let mut formatter = TreeFormatter::new(&mut *out);
    formatter.write_root(&label)?;

    let walker = TreeWalker::new(config.walker.clone());
    let summary = walker.walk(&config.root, &mut formatter)?;

    if html {
        write_closing(out)?;
    }
    Ok(summary)
}
