//! Key generation configuration.

use detkey_kernel::canon::writer::Layout;
use detkey_kernel::path::PathMap;
use detkey_kernel::redaction::RedactionOptions;

use crate::tool_versions::ToolVersions;

/// Per-call key generation options.
///
/// The default is maximally precise: no redaction, no path mapping, indented
/// layout, tool versions probed from the current environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOptions {
    /// Which environment-dependent facts to drop from the key.
    pub redaction: RedactionOptions,
    /// Prefix substitutions applied to every path-like field before
    /// redaction.
    pub path_map: PathMap,
    /// Indented (one member per line) or compact key text.
    pub layout: Layout,
    /// Tool versions to write. `None` probes [`ToolVersions::current`].
    /// Ignored under `IGNORE_TOOL_VERSIONS`.
    pub tool_versions: Option<ToolVersions>,
}

impl KeyOptions {
    /// Options with the given redaction flags and everything else default.
    #[must_use]
    pub fn redacted(redaction: RedactionOptions) -> Self {
        Self {
            redaction,
            ..Self::default()
        }
    }
}
