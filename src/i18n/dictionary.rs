//! Typed locale dictionaries.

use std::collections::{BTreeMap, BTreeSet};

/// A node in a locale dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A string template, possibly containing `{name}` placeholders.
    Text(String),
    /// A nested group of entries.
    Section(BTreeMap<String, Entry>),
}

/// Nested mapping from dot-delimited keys to string templates.
///
/// Immutable once built; lookups never fail loudly, they return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    root: BTreeMap<String, Entry>,
}

impl LocaleDictionary {
    /// Build a dictionary from an already nested tree.
    #[must_use]
    pub const fn from_entries(root: BTreeMap<String, Entry>) -> Self {
        Self { root }
    }

    /// What: Safe multi-level lookup of a dot-delimited key.
    ///
    /// Inputs:
    /// - `key`: Key such as `home.hero.title`
    ///
    /// Output:
    /// - `Some(template)` when the path ends on a non-empty text entry, `None` otherwise
    ///
    /// Details:
    /// - Empty segments (`home..title`, trailing `.`) never match
    /// - A path that ends on a section is a miss, as is an empty template
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            match node {
                Entry::Section(children) => node = children.get(segment)?,
                Entry::Text(_) => return None,
            }
        }
        match node {
            Entry::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// All dotted keys that resolve to text.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        collect_keys(&self.root, "", &mut out);
        out
    }

    /// Number of text entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// True when the dictionary holds no text entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk the tree and record the dotted path of every text entry.
fn collect_keys(map: &BTreeMap<String, Entry>, prefix: &str, out: &mut BTreeSet<String>) {
    for (key, entry) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match entry {
            Entry::Text(_) => {
                out.insert(path);
            }
            Entry::Section(children) => collect_keys(children, &path, out),
        }
    }
}
