//! CLI entry point for dirtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{Format, RenderConfig, Result, TreeError, TreeFormatter, Viewer};
use snafu::Report;
use tracing::debug;

const MAX_INDENT: i64 = 16;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Diagnostic verbosity on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Render a directory hierarchy as a tree, list, HTML, JSON or XML")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format: tree, indented, markdown, html, json, xml (or 1-4)
    #[arg(short = 'f', long = "format", default_value = "tree")]
    format: String,

    /// Spaces per level for indented and markdown output (0-16)
    #[arg(
        long = "indent",
        default_value = "2",
        value_parser = clap::value_parser!(u8).range(0..=MAX_INDENT)
    )]
    indent: u8,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Omit the "N directories, M files" line after the tree
    #[arg(long = "no-summary")]
    no_summary: bool,

    /// Log level for diagnostics written to stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn run(args: &Args) -> Result<()> {
    let format: Format = args.format.parse()?;
    let config = RenderConfig {
        use_color: should_use_color(args.color),
        indent_size: usize::from(args.indent),
        summary: !args.no_summary,
    };
    debug!(?format, ?config, "resolved output settings");

    let viewer = Viewer::new(config.clone());

    // The text tree goes straight to the terminal so directories can be colored
    if format == Format::TextTree {
        let tree = viewer.build(&args.path)?;
        return TreeFormatter::new(config)
            .print(&tree)
            .map_err(|source| TreeError::Write { source });
    }

    let output = viewer.render(&args.path, format)?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    if let Err(e) = run(&args) {
        report_error(e);
        process::exit(1);
    }
}

fn report_error(e: TreeError) {
    eprintln!("dirtree: {}", Report::from_error(e));
}
