//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `COMONDO_TRACE=1` enables TRACE level regardless of flags.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if std::env::var("COMONDO_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse a `name=value` placeholder argument.
///
/// Output:
/// - `(name, value)`; the value may be empty or contain further `=` signs.
///
/// # Errors
/// - Returns `Err` when there is no `=` or the name is empty.
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("expected name=value, got '{raw}'"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing placeholder name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
