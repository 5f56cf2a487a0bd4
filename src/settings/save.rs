use std::fs;
use std::io;
use std::path::Path;

use super::parsing::split_line;
use super::skeleton::SETTINGS_SKELETON_CONTENT;

/// What: Persist a single key to a settings file, preserving comments and other keys.
///
/// Inputs:
/// - `path`: Settings file to update
/// - `key`: Normalized key name (e.g. `locale`)
/// - `value`: New value, written verbatim
///
/// Output:
/// - `Ok(())` once the file has been rewritten
///
/// # Errors
/// - Returns `Err` when the parent directory cannot be created or the file cannot be written
///
/// Details:
/// - Missing or empty files are seeded from the skeleton before the key is set
/// - The first active line for `key` is rewritten; if none exists, the key is appended
pub fn save_key(path: &Path, key: &str, value: &str) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };
    let source = if existing.trim().is_empty() {
        SETTINGS_SKELETON_CONTENT
    } else {
        existing.as_str()
    };

    let mut lines: Vec<String> = source.lines().map(ToString::to_string).collect();
    let mut replaced = false;
    for line in &mut lines {
        let is_target = split_line(line).is_some_and(|(k, _)| k == key);
        if is_target {
            *line = format!("{key} = {value}");
            replaced = true;
            break;
        }
    }
    if !replaced {
        lines.push(format!("{key} = {value}"));
    }

    let mut new_content = lines.join("\n");
    new_content.push('\n');
    fs::write(path, new_content)?;
    tracing::debug!(path = %path.display(), key, value, "settings key saved");
    Ok(())
}

/// What: Read the value of one key from a settings file.
///
/// Output:
/// - `Ok(None)` when the file or key is absent or the value is empty
///
/// # Errors
/// - Returns `Err` for I/O failures other than a missing file
pub fn read_key(path: &Path, key: &str) -> io::Result<Option<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    Ok(content
        .lines()
        .filter_map(split_line)
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.to_string())
        .filter(|v| !v.is_empty()))
}
