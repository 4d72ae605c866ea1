//! Source texts, syntax trees, and additional texts.
//!
//! A [`SourceText`] owns its checksum cache: the checksum is computed at most
//! once, on first request, and reused by every key generated from the same
//! snapshot. Serializers only read it.

use std::sync::OnceLock;

use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::model::parse_options::{ParseOptions, SourceCodeKind};

symbolic_enum! {
    /// Checksum algorithm tag. Written next to every checksum so the hash is
    /// self-describing.
    #[derive(Default)]
    pub enum SourceHashAlgorithm {
        Sha1,
        #[default]
        Sha256,
    }
}

impl SourceHashAlgorithm {
    /// Hash `bytes` with this algorithm.
    #[must_use]
    pub fn digest(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => Sha1::digest(bytes).to_vec(),
            Self::Sha256 => Sha256::digest(bytes).to_vec(),
        }
    }
}

/// Immutable source text with a lazily computed, cached checksum.
///
/// The checksum covers the UTF-8 bytes of the content.
#[derive(Debug, Clone)]
pub struct SourceText {
    content: String,
    encoding: Option<String>,
    checksum_algorithm: SourceHashAlgorithm,
    checksum: OnceLock<Vec<u8>>,
}

impl SourceText {
    /// Text whose checksum is computed on first use.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        encoding: Option<&str>,
        checksum_algorithm: SourceHashAlgorithm,
    ) -> Self {
        Self {
            content: content.into(),
            encoding: encoding.map(str::to_string),
            checksum_algorithm,
            checksum: OnceLock::new(),
        }
    }

    /// Text with a checksum computed upstream (e.g. by a file-system
    /// provider that hashed the raw bytes).
    #[must_use]
    pub fn with_checksum(
        content: impl Into<String>,
        encoding: Option<&str>,
        checksum_algorithm: SourceHashAlgorithm,
        checksum: Vec<u8>,
    ) -> Self {
        let text = Self::new(content, encoding, checksum_algorithm);
        let _ = text.checksum.set(checksum);
        text
    }

    /// The full source text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Encoding name (e.g. `"utf-8"`), if known.
    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Algorithm used by [`checksum`](Self::checksum).
    #[must_use]
    pub fn checksum_algorithm(&self) -> SourceHashAlgorithm {
        self.checksum_algorithm
    }

    /// The checksum bytes, computing and caching them on first call.
    #[must_use]
    pub fn checksum(&self) -> &[u8] {
        self.checksum
            .get_or_init(|| self.checksum_algorithm.digest(self.content.as_bytes()))
    }
}

/// A parsed source file as seen by key generation.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    /// Path as given to the compiler.
    pub path: String,
    pub text: SourceText,
    /// Declared script-ness; must agree with `options.kind`.
    pub is_script: bool,
    pub options: ParseOptions,
}

impl SyntaxTree {
    /// A tree whose script-ness follows its parse options.
    #[must_use]
    pub fn new(path: impl Into<String>, text: SourceText, options: ParseOptions) -> Self {
        Self {
            path: path.into(),
            text,
            is_script: options.kind == SourceCodeKind::Script,
            options,
        }
    }
}

/// A non-source input file passed to analyzers and generators.
#[derive(Debug, Clone)]
pub struct AdditionalText {
    pub path: String,
    pub text: SourceText,
}

impl AdditionalText {
    #[must_use]
    pub fn new(path: impl Into<String>, text: SourceText) -> Self {
        Self {
            path: path.into(),
            text,
        }
    }
}
