//! Tool versions: the only intentionally environment-dependent key fields.
//!
//! Written so that cross-environment determinism failures are diagnosable;
//! dropped under [`RedactionOptions::IGNORE_TOOL_VERSIONS`] so that strict
//! reproducibility checks can ignore them.
//!
//! [`RedactionOptions::IGNORE_TOOL_VERSIONS`]: detkey_kernel::redaction::RedactionOptions::IGNORE_TOOL_VERSIONS

/// Versions and descriptors of the producing toolchain and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersions {
    /// Version of the key generator / compiler build.
    pub compiler_version: String,
    /// Runtime the compiler was built with.
    pub runtime_version: String,
    /// Runtime family and architecture.
    pub framework_description: String,
    /// Host operating system.
    pub os_description: String,
}

impl ToolVersions {
    /// Probe the current build and host.
    #[must_use]
    pub fn current() -> Self {
        Self {
            compiler_version: env!("CARGO_PKG_VERSION").to_string(),
            runtime_version: option_env!("DETKEY_RUSTC_VERSION")
                .unwrap_or("unknown")
                .to_string(),
            framework_description: format!(
                "{} {}",
                std::env::consts::FAMILY,
                std::env::consts::ARCH
            ),
            os_description: std::env::consts::OS.to_string(),
        }
    }
}
