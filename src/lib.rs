//! Library entry for Comondo exposing the locale and scroll state machinery.

pub mod i18n;
pub mod scroll;
pub mod settings;
