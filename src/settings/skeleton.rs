/// Content written to `settings.conf` the first time a key is persisted.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Comondo settings
# Lines are `key = value`. Comments start with # or //.

# Active language (en | id). Written when the language is changed.
locale =

# Language used when `locale` is empty or invalid.
default_locale = en

# Directory with {tag}.yml dictionaries. Leave empty to use the bundled ones.
locales_dir =

# Disable flip and reveal animations.
reduced_motion = false

# Roadmap card flip duration in milliseconds.
flip_duration_ms = 700

# Viewport root margin for section tracking, in percent (negative shrinks).
root_margin_top_pct = -40
root_margin_bottom_pct = -40

# Minimum visible ratio before an element plays its enter animation.
reveal_threshold = 0.16

# Scroll offset in pixels below which the navigation bar never hides.
nav_hide_offset = 80
";
