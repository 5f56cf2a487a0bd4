//! Settings for Comondo.
//!
//! Settings live in a plain `settings.conf` file made of `key = value` lines. Comments start
//! with `#` or `//` and may trail a value. Keys are normalized (lowercase, with `.`, `-` and
//! spaces mapped to `_`), so `Reduced-Motion = on` and `reduced_motion = on` are equivalent.
//!
//! The same file doubles as the durable storage for the active language (`locale = id`),
//! see [`crate::i18n::SettingsFileStore`].

/// Reading settings from disk.
mod load;
/// Path resolution for config directories.
mod paths;
/// Line-level parsing helpers.
mod parsing;
/// Writing single keys back to disk.
mod save;
/// Default file content.
mod skeleton;
/// Settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, set_config_dir_override, settings_path};
pub use parsing::{normalize_key, parse_bool, strip_inline_comment};
pub use save::{read_key, save_key};
pub use load::{load_settings, settings};
pub use skeleton::SETTINGS_SKELETON_CONTENT;
pub use types::{MAX_FLIP_DURATION_MS, Settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Serialize tests that mutate process-wide environment variables.
///
/// Output:
/// - Shared mutex; hold its guard for the whole test.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
