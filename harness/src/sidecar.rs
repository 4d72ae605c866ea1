//! `.key` sidecar persistence: write/read/verify a key next to its output.
//!
//! # Layout
//!
//! ```text
//! <dir>/
//!   App.dll        build output (never touched here)
//!   App.dll.key    key text, UTF-8, no BOM, no trailing newline
//! ```
//!
//! The file holds exactly the bytes of [`CompilationKey::as_str`]. Reading
//! returns the raw text; there is no parser back into compilation inputs.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use detkey_compilation::CompilationKey;
use tracing::{debug, warn};

use crate::divergence::{first_divergence, KeyDivergence};

/// Extension appended to the output file name.
pub const KEY_FILE_EXTENSION: &str = "key";

/// Error persisting or verifying a key file.
#[derive(Debug, thiserror::Error)]
pub enum KeyFileError {
    /// I/O error on the key file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The stored key does not match the freshly built one.
    #[error(transparent)]
    Divergence(#[from] KeyDivergence),
}

/// `<output>.key`: the extension is appended, not substituted.
#[must_use]
pub fn key_file_path(output_path: &Path) -> PathBuf {
    let mut name = OsString::from(output_path.as_os_str());
    name.push(".");
    name.push(KEY_FILE_EXTENSION);
    PathBuf::from(name)
}

/// Write `key` to `<output>.key`, replacing any previous file.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns [`KeyFileError::Io`] if the file cannot be written.
pub fn write_key_file(output_path: &Path, key: &CompilationKey) -> Result<PathBuf, KeyFileError> {
    let path = key_file_path(output_path);
    std::fs::write(&path, key.as_str().as_bytes()).map_err(|source| KeyFileError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(
        path = %path.display(),
        bytes = key.len(),
        digest = %key.digest(),
        "wrote key file"
    );
    Ok(path)
}

/// Read the raw key text from `<output>.key`.
///
/// # Errors
///
/// Returns [`KeyFileError::Io`] if the file is missing, unreadable, or not
/// valid UTF-8.
pub fn read_key_file(output_path: &Path) -> Result<String, KeyFileError> {
    let path = key_file_path(output_path);
    std::fs::read_to_string(&path).map_err(|source| KeyFileError::Io { path, source })
}

/// Compare `key` against the stored `<output>.key`.
///
/// # Errors
///
/// - [`KeyFileError::Io`] if the stored key cannot be read.
/// - [`KeyFileError::Divergence`] naming the first line where the stored key
///   departs from `key`.
pub fn verify_key_file(output_path: &Path, key: &CompilationKey) -> Result<(), KeyFileError> {
    let stored = read_key_file(output_path)?;
    match first_divergence(key.as_str(), &stored) {
        None => Ok(()),
        Some(divergence) => {
            warn!(
                path = %key_file_path(output_path).display(),
                line = divergence.line,
                "stored key diverges from rebuilt key"
            );
            Err(divergence.into())
        }
    }
}
