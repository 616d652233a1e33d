//! Fixed HTML markup around the tree body
//!
//! The root label is inserted as-is so the `<pre>` block holds exactly the
//! bytes the console would show.

use std::io::{self, Write};

/// Write everything up to and including the opening `<pre>`.
pub fn write_preamble<W: Write>(out: &mut W, root_label: &str) -> io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>Directory Tree</title>")?;
    writeln!(out, "<style>body {{ font-family: monospace; }}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>Directory Tree for {}</h1>", root_label)?;
    writeln!(out, "<pre>")?;
    Ok(())
}

pub fn write_closing<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</pre>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}
