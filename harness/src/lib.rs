//! Detkey Harness: persistence and verification of compilation keys.
//!
//! A key is written next to the build output as `<output>.key`, byte-identical
//! to the in-memory text. Verification rebuilds nothing: it compares a freshly
//! built key against the stored one and reports the first divergent line, which
//! is where a reproducibility investigation starts.
//!
//! The harness never parses a key back into compilation inputs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod divergence;
pub mod sidecar;

pub use divergence::{first_divergence, KeyDivergence};
pub use sidecar::{key_file_path, read_key_file, verify_key_file, write_key_file, KeyFileError};
