//! detkey kernel: the deterministic serialization core.
//!
//! # API Surface
//!
//! - [`canon::writer::CanonicalWriter`] -- streaming, insertion-ordered structured-text writer
//! - [`canon::hex::encode_bytes`] -- fixed lowercase-hex rendering of opaque byte spans
//! - [`redaction::RedactionOptions`] -- flags controlling path / tool-version redaction
//! - [`path`] -- file-name extraction and `/pathmap`-style prefix substitution
//! - [`hash::canonical_hash`] -- domain-separated SHA-256 digests of finished keys
//!
//! # Module Dependency Direction
//!
//! `hash_domain` ← `hash`; `canon`, `path` and `redaction` stand alone.
//!
//! The kernel knows nothing about compilations. It never reorders, dedups, or
//! validates what callers write; every canonicalization decision belongs to
//! the serializers in `detkey-compilation`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod path;
pub mod redaction;
