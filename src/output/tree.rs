//! Tree line formatter
//!
//! This module provides `TreeFormatter`, which renders each `TraversalNode`
//! as one line as soon as the walker yields it.

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{NodeKind, TraversalNode, TreeOutput};

/// Indentation for one level.
pub const INDENT: &str = "    ";
/// Marker placed before every entry name.
pub const BRANCH: &str = "└── ";

/// A rendered line split around the part that may be coloured.
struct Line {
    lead: String,
    highlight: String,
    tail: &'static str,
    color: ColorSpec,
}

impl Line {
    fn of(node: &TraversalNode) -> Self {
        let indent = INDENT.repeat(node.level);
        match node.kind {
            NodeKind::Dir => Line {
                lead: format!("{}{}[DIR] ", indent, BRANCH),
                highlight: node.name.clone(),
                tail: "",
                color: ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true).clone(),
            },
            NodeKind::File { size } => Line {
                lead: format!("{}{}{} (", indent, BRANCH, node.name),
                highlight: size.to_string(),
                tail: " bytes)",
                color: ColorSpec::new().set_fg(Some(Color::Green)).clone(),
            },
        }
    }
}

/// Render a node as a plain line, without the trailing newline.
pub fn format_line(node: &TraversalNode) -> String {
    let line = Line::of(node);
    format!("{}{}{}", line.lead, line.highlight, line.tail)
}

/// Streaming formatter - writes each line to the wrapped stream immediately.
pub struct TreeFormatter<W> {
    out: W,
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the root label on its own, unindented line.
    pub fn write_root(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "{}", label)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn output_node(&mut self, node: &TraversalNode) -> io::Result<()> {
        let line = Line::of(node);
        write!(self.out, "{}", line.lead)?;
        self.out.set_color(&line.color)?;
        write!(self.out, "{}", line.highlight)?;
        self.out.reset()?;
        writeln!(self.out, "{}", line.tail)
    }
}
