use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable that pins the config directory.
pub(crate) const CONFIG_DIR_ENV: &str = "COMONDO_CONFIG_DIR";

/// Directory chosen on the command line; wins over the environment.
static CONFIG_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// What: Pin the config directory for the rest of the process (`--config-dir`).
///
/// Output:
/// - `false` when an override was already set; the first one stays in effect
pub fn set_config_dir_override(dir: PathBuf) -> bool {
    CONFIG_DIR_OVERRIDE.set(dir).is_ok()
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for Comondo (ensured to exist).
///
/// Priority: `--config-dir`, `COMONDO_CONFIG_DIR`, `$XDG_CONFIG_HOME/comondo`, `$HOME/.config/comondo`.
pub fn config_dir() -> PathBuf {
    let dir = if let Some(dir) = CONFIG_DIR_OVERRIDE.get() {
        dir.clone()
    } else {
        match env::var(CONFIG_DIR_ENV) {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("comondo"),
        }
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "could not create config dir");
    }
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of `settings.conf` inside [`config_dir`]. The file itself may not exist yet.
pub fn settings_path() -> PathBuf {
    settings_path_in(&config_dir())
}

/// `settings.conf` inside an explicit directory.
pub(crate) fn settings_path_in(dir: &Path) -> PathBuf {
    dir.join("settings.conf")
}
