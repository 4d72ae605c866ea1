//! Path helpers for path-like key fields.
//!
//! Key generation never touches the file system. Paths are opaque strings;
//! both `/` and `\` count as separators regardless of host platform, so a
//! key computed on one OS redacts identically on another.

use std::borrow::Cow;

/// Last path segment of `path` (`"src/a.cs"` → `"a.cs"`).
///
/// A trailing separator yields the empty string.
#[must_use]
pub fn file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Ordered prefix substitutions, applied before redaction (`/pathmap`).
///
/// The first entry (in caller order) whose prefix matches at a path-segment
/// boundary wins. Separators in the unmatched remainder are rewritten to the
/// separator style of the replacement prefix, so `C:\src\a.cs` mapped through
/// `C:\src` → `/_/` becomes `/_/a.cs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMap {
    entries: Vec<(String, String)>,
}

impl PathMap {
    /// Build from `(old_prefix, new_prefix)` pairs. Pairs with an empty
    /// `old_prefix` never match.
    #[must_use]
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(k, _)| !k.is_empty())
                .collect(),
        }
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in caller order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Apply the first matching substitution, or return `path` unchanged.
    #[must_use]
    pub fn map<'a>(&self, path: &'a str) -> Cow<'a, str> {
        for (old, new) in &self.entries {
            let Some(rest) = path.strip_prefix(old.as_str()) else {
                continue;
            };
            let at_boundary = rest.is_empty()
                || old.ends_with(is_separator)
                || rest.starts_with(is_separator);
            if !at_boundary {
                continue;
            }

            let sep = if new.contains('\\') && !new.contains('/') {
                '\\'
            } else {
                '/'
            };
            let rest = rest.trim_start_matches(is_separator);

            let mut mapped = new.clone();
            if !rest.is_empty() {
                if !mapped.is_empty() && !mapped.ends_with(is_separator) {
                    mapped.push(sep);
                }
                mapped.extend(rest.chars().map(|c| if is_separator(c) { sep } else { c }));
            }
            return Cow::Owned(mapped);
        }
        Cow::Borrowed(path)
    }
}
