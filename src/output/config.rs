//! Output configuration types

use std::path::PathBuf;

/// Name of the file written in HTML mode, relative to the working directory.
pub const HTML_OUTPUT_FILE: &str = "directory_tree.html";

/// Where the tree goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Console,
    Html,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub mode: OutputMode,
    /// Console only; HTML output is never colored.
    pub use_color: bool,
    pub html_path: PathBuf,
}

impl OutputConfig {
    pub fn console(use_color: bool) -> Self {
        Self {
            mode: OutputMode::Console,
            use_color,
            ..Default::default()
        }
    }

    pub fn html() -> Self {
        Self {
            mode: OutputMode::Html,
            ..Default::default()
        }
    }

    pub fn is_html(&self) -> bool {
        self.mode == OutputMode::Html
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Console,
            use_color: false,
            html_path: PathBuf::from(HTML_OUTPUT_FILE),
        }
    }
}
