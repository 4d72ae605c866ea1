//! Redaction flags: which environment-specific fields a key omits or shortens.
//!
//! Created once per key-generation call and passed by value to every
//! serializer. Never mutated mid-traversal.

bitflags::bitflags! {
    /// Environment-redaction options for key generation.
    ///
    /// The empty set (the default) is maximally precise: full paths and the
    /// current tool versions are written.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RedactionOptions: u32 {
        /// Keep only the last path segment of every path-like field.
        const IGNORE_PATHS = 1 << 0;
        /// Write an empty `toolsVersions` object.
        const IGNORE_TOOL_VERSIONS = 1 << 1;
    }
}

impl RedactionOptions {
    /// Whether path-like fields are reduced to their file name.
    #[must_use]
    pub fn ignore_paths(self) -> bool {
        self.contains(Self::IGNORE_PATHS)
    }

    /// Whether tool versions are left out.
    #[must_use]
    pub fn ignore_tool_versions(self) -> bool {
        self.contains(Self::IGNORE_TOOL_VERSIONS)
    }
}
