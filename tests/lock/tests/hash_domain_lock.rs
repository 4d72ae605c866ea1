//! Hash domain and key surface governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique (prevents domain collision)
//! 3. All domains are null-terminated
//! 4. All domains follow `DETKEY::*::V{KEY_SCHEMA_VERSION}\0`
//! 5. No raw `DETKEY::` domain literals in production source outside `hash_domain.rs`
//! 6. No deserialization path from key text back into inputs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use detkey_kernel::hash::HashDomain;
use detkey_kernel::hash_domain::KEY_SCHEMA_VERSION;

// ---------------------------------------------------------------------------
// 1. Canonical set count
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        2,
        "expected 2 domain variants; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2. All unique bytes
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

// ---------------------------------------------------------------------------
// 3. All null-terminated
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Naming convention
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_follow_naming_convention() {
    let suffix = format!("::V{KEY_SCHEMA_VERSION}\0");
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"DETKEY::"),
            "{domain} does not start with DETKEY::"
        );
        assert!(
            bytes.ends_with(suffix.as_bytes()),
            "{domain} does not end with {suffix:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// 5. No raw DETKEY:: domain literals in production source
// ---------------------------------------------------------------------------

/// The only file allowed to contain domain literals is `hash_domain.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let violations = scan_production_sources("b\"DETKEY::", Some("hash_domain.rs"));
    assert!(
        violations.is_empty(),
        "raw DETKEY:: domain literals found outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

// ---------------------------------------------------------------------------
// 6. No deserialization path
// ---------------------------------------------------------------------------

/// Keys are one-way. Production code must not derive or implement
/// `Deserialize`, and must not offer a `FromStr` for keys.
#[test]
fn no_deserialization_in_production_source() {
    let mut violations = scan_production_sources("Deserialize", None);
    violations.extend(scan_production_sources("impl FromStr for", None));
    violations.extend(scan_production_sources("impl std::str::FromStr for", None));
    assert!(
        violations.is_empty(),
        "deserialization surface found in production source:\n{}",
        violations.join("\n")
    );
}

fn production_dirs() -> [PathBuf; 3] {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    [
        root.join("kernel/src"),
        root.join("compilation/src"),
        root.join("harness/src"),
    ]
}

fn scan_production_sources(pattern: &str, authority_file: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in &production_dirs() {
        assert!(dir.exists(), "production dir missing: {}", dir.display());
        for path in walkdir(dir) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if authority_file.is_some()
                && path.file_name().and_then(|n| n.to_str()) == authority_file
            {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            scan_content(&path, &content, pattern, &mut violations);
        }
    }
    violations
}

/// Report non-comment lines containing `pattern`, skipping `#[cfg(test)]`
/// blocks via brace-depth tracking.
fn scan_content(path: &Path, content: &str, pattern: &str, violations: &mut Vec<String>) {
    let mut brace_depth: usize = 0;
    let mut skip_depth: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.chars().filter(|&c| c == '{').count();
        let closes = line.chars().filter(|&c| c == '}').count();

        if cfg_test_pending && opens > 0 {
            skip_depth = Some(brace_depth);
            cfg_test_pending = false;
        }

        brace_depth = brace_depth.saturating_add(opens);
        brace_depth = brace_depth.saturating_sub(closes);

        if let Some(depth) = skip_depth {
            if brace_depth <= depth {
                skip_depth = None;
            }
            continue;
        }

        if trimmed.starts_with("//") {
            continue;
        }

        if trimmed.contains(pattern) {
            violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
        }
    }
}

/// Simple recursive directory walker (avoids adding walkdir dependency).
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}

#[test]
fn scanner_skips_tests_and_comments() {
    let source = "\
// Deserialize in a comment
fn live() {}
#[cfg(test)]
mod tests {
    use serde::Deserialize;
}
fn after() { let _ = \"Deserialize\"; }
";
    let mut violations = Vec::new();
    scan_content(Path::new("x.rs"), source, "Deserialize", &mut violations);
    assert_eq!(violations.len(), 1, "{violations:?}");
    assert!(violations[0].contains("x.rs:7"));
}
