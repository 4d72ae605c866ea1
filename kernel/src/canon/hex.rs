//! Byte/hash encoder.
//!
//! Every byte renders as exactly two lowercase hex characters, concatenated
//! with no separators. Fixed width keeps the encoding injective for a given
//! input length. An empty span renders as the empty string; whether a value
//! is absent (`null`) or present-but-empty is the caller's decision.

/// Render `bytes` as lowercase hex.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
