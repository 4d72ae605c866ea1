//! Canonical text output: the single place key text is produced.
//!
//! All key serialization flows route through [`writer::CanonicalWriter`].
//! Byte spans (public keys, checksums) route through [`hex::encode_bytes`].

pub mod hex;
pub mod writer;
