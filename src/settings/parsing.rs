/// What: Normalize a settings key for comparison.
///
/// Inputs:
/// - `raw`: Key text as written on the left of `=`
///
/// Output:
/// - Lowercase key with `.`, `-` and spaces replaced by `_`
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Remove a trailing `#` or `//` comment from a value.
///
/// Details:
/// - The first `#` or `//` ends the value, so `locale = # unset` reads as empty.
pub fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    s.trim()
}

/// What: Interpret common boolean spellings.
///
/// Output:
/// - `Some(true)` for `true/1/yes/on`, `Some(false)` for `false/0/no/off`, `None` otherwise
#[must_use]
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Split a settings line into normalized key and comment-free value.
///
/// Output:
/// - `None` for blank lines, comments and lines without `=`
pub(crate) fn split_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    Some((normalize_key(raw_key), strip_inline_comment(raw_val.trim())))
}
