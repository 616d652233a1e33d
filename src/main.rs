//! CLI entry point for rec-traverse

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use rec_traverse::logging::init_logging;
use rec_traverse::{OutputConfig, RunConfig, WalkerConfig, run};
use tracing::error;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal, unless NO_COLOR or TERM=dumb is set
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rec-traverse")]
#[command(about = "Recursively list a directory tree with file sizes")]
#[command(version)]
struct Args {
    /// Directory to traverse
    directory: PathBuf,

    /// Output the directory tree to directory_tree.html instead of the console
    #[arg(long)]
    html: bool,

    /// Limit the traversal to a maximum depth (-1 means no limit)
    #[arg(
        long = "maxdepth",
        value_name = "N",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    maxdepth: i64,

    /// Keep listing past unreadable entries and fail at the end instead
    #[arg(long = "keep-going")]
    keep_going: bool,

    /// Color console output: never, auto, always
    #[arg(long = "color", value_name = "WHEN", default_value = "never")]
    color: ColorMode,
}

/// Parse argv. Usage errors print the error and full help, then exit with 1.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            println!();
            let _ = Args::command().print_help();
            process::exit(1);
        }
    })
}

fn build_config(args: &Args) -> RunConfig {
    let mut walker = WalkerConfig::default().with_max_depth(WalkerConfig::depth_limit(args.maxdepth));
    if args.keep_going {
        walker = walker.keep_going();
    }

    let output = if args.html {
        OutputConfig::html()
    } else {
        OutputConfig::console(should_use_color(args.color))
    };

    RunConfig::new(args.directory.clone())
        .with_walker(walker)
        .with_output(output)
}

fn main() {
    let args = parse_args();
    init_logging();

    let config = build_config(&args);

    // The sink is closed inside `run`, so exiting here never loses buffered output.
    match run(&config) {
        Ok(report) => {
            if let Some(path) = &report.html_file {
                println!("HTML file generated: {}", path.display());
            }
            if let Err(e) = report.check() {
                error!("{}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("listing aborted: {}", e);
            process::exit(1);
        }
    }
}
