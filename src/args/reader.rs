//! Reader preference and reading progress commands.

use crate::args::Args;
use crate::storage::{FileStore, KeyValueStore, ReaderPrefs, ReadingProgress, StorageError};
use crate::theme::storage_path;

/// What: Apply reader flags to a store and describe the result.
///
/// Inputs:
/// - `args`: Parsed arguments (reader and progress flags)
/// - `store`: Store holding reader keys
///
/// Output:
/// - Lines to print, or the first storage error.
///
/// Details:
/// - Preferences are updated only for the flags given; the full set is always reported.
/// - `--progress` alone reports the stored position and whether a resume would be offered.
///
/// # Errors
/// - Returns `StorageError` when a write to the store fails.
pub fn apply_reader_flags(
    args: &Args,
    store: &mut dyn KeyValueStore,
) -> Result<Vec<String>, StorageError> {
    let mut lines = Vec::new();
    if args.reader_theme.is_some() || args.reader_font.is_some() || args.reader_size.is_some() {
        let mut prefs = ReaderPrefs::load(store);
        if let Some(theme) = args.reader_theme {
            prefs.theme = theme;
        }
        if let Some(font) = args.reader_font {
            prefs.font = font;
        }
        if let Some(size) = args.reader_size {
            prefs.size = size;
        }
        prefs.save(store)?;
        tracing::info!(
            theme = prefs.theme.as_str(),
            font = prefs.font.as_str(),
            size = prefs.size.as_str(),
            "[Reader] Preferences saved"
        );
        lines.push(format!(
            "Reader: theme={} font={} size={} ({})",
            prefs.theme.as_str(),
            prefs.font.as_str(),
            prefs.size.as_str(),
            prefs.size.base_rem()
        ));
    }

    if let Some(page) = &args.progress {
        let mut progress = ReadingProgress::load(store, page);
        if args.reset_progress {
            progress.reset(store)?;
            lines.push(format!("Progress for {page} cleared"));
        } else if let Some(pct) = args.set_progress {
            progress.save(store, pct)?;
            lines.push(format!(
                "Progress for {page} saved at {:.1}%",
                progress.percent.unwrap_or_default()
            ));
        } else {
            match progress.percent {
                Some(p) if progress.offers_resume() => {
                    lines.push(format!("Progress for {page}: {p:.1}% (resume available)"));
                }
                Some(p) => lines.push(format!("Progress for {page}: {p:.1}%")),
                None => lines.push(format!("No progress stored for {page}")),
            }
        }
    }
    Ok(lines)
}

/// What: Run reader commands against the storage file and print the outcome.
///
/// # Errors
/// - Returns `StorageError` when the storage file cannot be written.
pub fn run_reader_command(args: &Args) -> Result<(), StorageError> {
    let mut store = FileStore::open(&storage_path());
    for line in apply_reader_flags(args, &mut store)? {
        println!("{line}");
    }
    Ok(())
}
