//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `sink` - Console or file destination behind one `WriteColor` stream
//! - `html` - Fixed markup wrapped around the tree in HTML mode
//! - `tree` - Line formatter fed by the walker

mod config;
mod html;
mod sink;
mod tree;

pub use config::{HTML_OUTPUT_FILE, OutputConfig, OutputMode};
pub use html::{write_closing, write_preamble};
pub use sink::Sink;
pub use tree::{BRANCH, INDENT, TreeFormatter, format_line};
