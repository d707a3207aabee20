//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::state::SortMode;
use crate::storage::{FontSize, ReaderFont, ReaderTheme};
use crate::theme::Settings;

/// Aklatell - browse, search and favorite a book catalog from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "aklatell")]
#[command(version)]
#[command(about = "Browse, search and favorite a book catalog from the terminal", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Catalog path or http(s) URL (overrides `catalog_source` in settings.conf)
    #[arg(long)]
    pub source: Option<String>,

    /// Specify the configuration directory (default: ~/.config/aklatell)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Books rendered per page
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Sort order: newest, title or author
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortMode>,

    /// Start with (or list/export) favorites only
    #[arg(long)]
    pub favorites_only: bool,

    /// Initial search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print the first page to stdout and exit
    #[arg(long)]
    pub list: bool,

    /// Write the first page as an HTML document to this path and exit
    #[arg(long, value_name = "PATH")]
    pub export_html: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Store the reader theme: light, sepia or dark
    #[arg(long, value_parser = parse_reader_theme)]
    pub reader_theme: Option<ReaderTheme>,

    /// Store the reader font: Arial, Spectral or Domine
    #[arg(long, value_parser = parse_reader_font)]
    pub reader_font: Option<ReaderFont>,

    /// Store the reader text size: small, medium or large
    #[arg(long, value_parser = parse_reader_size)]
    pub reader_size: Option<FontSize>,

    /// Show the stored reading position of a book page (path or URL)
    #[arg(long, value_name = "PAGE")]
    pub progress: Option<String>,

    /// Store a reading position in percent (use with --progress)
    #[arg(long, value_name = "PERCENT", requires = "progress")]
    pub set_progress: Option<f64>,

    /// Forget the reading position (use with --progress)
    #[arg(long, requires = "progress", conflicts_with = "set_progress")]
    pub reset_progress: bool,
}

impl Args {
    /// Whether any reader preference or progress flag was given.
    #[must_use]
    pub const fn has_reader_command(&self) -> bool {
        self.reader_theme.is_some()
            || self.reader_font.is_some()
            || self.reader_size.is_some()
            || self.progress.is_some()
    }
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, got '{s}'")),
    }
}

fn parse_sort(s: &str) -> Result<SortMode, String> {
    SortMode::from_config_key(s).ok_or_else(|| format!("unknown sort '{s}' (newest, title, author)"))
}

fn parse_reader_theme(s: &str) -> Result<ReaderTheme, String> {
    ReaderTheme::parse(s).ok_or_else(|| format!("unknown reader theme '{s}' (light, sepia, dark)"))
}

fn parse_reader_font(s: &str) -> Result<ReaderFont, String> {
    ReaderFont::parse(s).ok_or_else(|| format!("unknown reader font '{s}' (Arial, Spectral, Domine)"))
}

fn parse_reader_size(s: &str) -> Result<FontSize, String> {
    FontSize::parse(s).ok_or_else(|| format!("unknown reader size '{s}' (small, medium, large)"))
}

/// What: Layer command-line overrides on top of file settings.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `settings`: Settings loaded from settings.conf
///
/// Output:
/// - Effective settings for this run.
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(source) = &args.source {
        settings.catalog_source.clone_from(source);
    }
    if let Some(n) = args.page_size {
        settings.page_size = n;
    }
    if let Some(mode) = args.sort {
        settings.sort_mode = mode;
    }
    settings
}
