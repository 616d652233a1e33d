//! A single writable stream for console and file output
//!
//! The walker and formatter write to a `Sink` without knowing where the bytes
//! end up. Only the HTML preamble and closing differ by mode.

use std::fs::File;
use std::io::{self, LineWriter, Write};

use termcolor::{ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};
use tracing::debug;

use crate::error::TreeError;

use super::config::{OutputConfig, OutputMode};

pub enum Sink {
    Console(StandardStream),
    /// Line-buffered, so the file on disk grows one complete line at a time.
    File(NoColor<LineWriter<File>>),
}

impl Sink {
    /// Open the destination named by `config`, creating or truncating the
    /// HTML file in HTML mode.
    pub fn open(config: &OutputConfig) -> Result<Self, TreeError> {
        match config.mode {
            OutputMode::Console => {
                // The color decision was already made from flags and environment.
                let choice = if config.use_color {
                    ColorChoice::Always
                } else {
                    ColorChoice::Never
                };
                Ok(Sink::Console(StandardStream::stdout(choice)))
            }
            OutputMode::Html => {
                let file = File::create(&config.html_path).map_err(|source| {
                    TreeError::CreateOutput {
                        path: config.html_path.clone(),
                        source,
                    }
                })?;
                debug!(path = %config.html_path.display(), "opened HTML output");
                Ok(Sink::File(NoColor::new(LineWriter::new(file))))
            }
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Console(out) => out.write(buf),
            Sink::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Console(out) => out.flush(),
            Sink::File(out) => out.flush(),
        }
    }
}

impl WriteColor for Sink {
    fn supports_color(&self) -> bool {
        match self {
            Sink::Console(out) => out.supports_color(),
            Sink::File(out) => out.supports_color(),
        }
    }

    fn set_color(&mut self, spec: &ColorSpec) -> io::Result<()> {
        match self {
            Sink::Console(out) => out.set_color(spec),
            Sink::File(out) => out.set_color(spec),
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        match self {
            Sink::Console(out) => out.reset(),
            Sink::File(out) => out.reset(),
        }
    }
}
