//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Filter directive string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`.
/// - A non-empty `RUST_LOG` wins over both.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if let Ok(env) = std::env::var("RUST_LOG")
        && !env.trim().is_empty()
    {
        return env;
    }
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
