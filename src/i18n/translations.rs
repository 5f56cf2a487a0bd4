//! Translation lookup and placeholder interpolation.

use std::fmt::Display;

use crate::i18n::dictionary::LocaleDictionary;

/// Variables for `{name}` placeholders: `(name, value)` pairs.
pub type TemplateVars<'a> = [(&'a str, &'a dyn Display)];

/// What: Look up a translation without any fallback.
///
/// Output:
/// - `Some(template)` or `None` when the key is absent from `dictionary`
#[must_use]
pub fn translate<'d>(key: &str, dictionary: &'d LocaleDictionary) -> Option<&'d str> {
    dictionary.get(key)
}

/// What: Look up a translation, returning the key itself on a miss.
///
/// Details:
/// - Each miss is logged at debug level
#[must_use]
pub fn translate_or_key(key: &str, dictionary: &LocaleDictionary) -> String {
    translate(key, dictionary).map_or_else(
        || {
            tracing::debug!(
                "Missing translation key: '{}'. Returning key as-is. Please add this key to locale files.",
                key
            );
            key.to_string()
        },
        ToString::to_string,
    )
}

/// What: Replace `{name}` placeholders in `template` with values from `vars`.
///
/// Inputs:
/// - `template`: Text possibly containing `{name}` placeholders
/// - `vars`: Placeholder values; when a name repeats, the first pair wins
///
/// Output:
/// - Interpolated string
///
/// Details:
/// - Single left-to-right pass: substituted values are never scanned again
/// - Placeholders without a matching variable, and unbalanced braces, are kept verbatim
#[must_use]
pub fn interpolate(template: &str, vars: &TemplateVars<'_>) -> String {
    if vars.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        // A nested '{' restarts the search so "{{name}" still substitutes the inner one.
        let close = after_open.find(['}', '{']);
        match close {
            Some(end) if after_open.as_bytes()[end] == b'}' => {
                let name = &after_open[..end];
                match vars.iter().find(|(var, _)| *var == name) {
                    Some((_, value)) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after_open[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}
