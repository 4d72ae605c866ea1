//! detkey compilation: deterministic compilation keys.
//!
//! Serializes every semantically relevant input of a compiler run (sources,
//! parse/compilation/emit options, references, analyzers, generators, tool
//! versions) into a stable, human-inspectable key. Two equivalent
//! compilations produce byte-identical keys.
//!
//! # Crate dependency graph
//!
//! ```text
//! detkey_kernel  ←  detkey_compilation  ←  detkey_harness
//! (writer, hex,      (model, serializers,    (.key sidecars,
//!  redaction)         key builder)             verification)
//! ```
//!
//! # Key types
//!
//! - [`CompilationSnapshot`] -- immutable compiler inputs, owned by the caller
//! - [`AdditionalInputs`] -- additional texts, analyzers, generators, emit options
//! - [`KeyOptions`] -- redaction flags, path map, layout, tool-version override
//! - [`CompilationKey`] -- the finished key (one-way; no parser exists)
//! - [`build_key`] / [`build_emit_options_key`] -- the two entry points
//!
//! # Key shape
//!
//! ```text
//! {
//!   "compilation": { "toolsVersions", "options", "syntaxTrees", "references", "publicKey" },
//!   "additionalTexts": [...],
//!   "analyzers": [...],
//!   "generators": [...],
//!   "emitOptions": {...}
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod serialize;
pub mod tool_versions;

pub use builder::{build_emit_options_key, build_key, CompilationKey};
pub use config::KeyOptions;
pub use error::KeyError;
pub use model::snapshot::{AdditionalInputs, CompilationSnapshot};
