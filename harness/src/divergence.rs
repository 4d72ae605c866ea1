//! First-divergence reporting between two key texts.
//!
//! Keys are compared line by line. Under the indented layout each member sits
//! on its own line, so the first differing line names the first differing
//! input. Compact keys are a single line and only report that they differ.

/// The first line at which two keys differ.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key diverges at line {line}: expected {}, found {}", show(.expected), show(.actual))]
pub struct KeyDivergence {
    /// 1-based line number.
    pub line: usize,
    /// The expected line, or `None` if the expected key ended first.
    pub expected: Option<String>,
    /// The actual line, or `None` if the actual key ended first.
    pub actual: Option<String>,
}

fn show(line: &Option<String>) -> String {
    match line {
        Some(text) => format!("{text:?}"),
        None => "end of key".to_string(),
    }
}

/// Find the first line where `actual` departs from `expected`.
///
/// Returns `None` exactly when the two texts are byte-identical. A trailing
/// newline on one side counts as an extra, empty line.
#[must_use]
pub fn first_divergence(expected: &str, actual: &str) -> Option<KeyDivergence> {
    if expected == actual {
        return None;
    }
    let mut left = expected.split('\n');
    let mut right = actual.split('\n');
    let mut line = 0;
    loop {
        line += 1;
        match (left.next(), right.next()) {
            (Some(a), Some(b)) if a == b => {}
            (None, None) => return None,
            (a, b) => {
                return Some(KeyDivergence {
                    line,
                    expected: a.map(str::to_string),
                    actual: b.map(str::to_string),
                });
            }
        }
    }
}
