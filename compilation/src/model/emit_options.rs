//! Emit options bundle.

use serde::Serialize;

use crate::model::source::SourceHashAlgorithm;

symbolic_enum! {
    /// Debug information format written next to (or into) the binary.
    #[derive(Default)]
    pub enum DebugInformationFormat {
        Pdb,
        #[default]
        PortablePdb,
        Embedded,
    }
}

symbolic_enum! {
    /// Code instrumentation injected at emit time.
    pub enum InstrumentationKind {
        TestCoverage,
        StackOverflowProbing,
        ModuleCancellation,
    }
}

/// PE subsystem version (`major.minor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubsystemVersion {
    pub major: u16,
    pub minor: u16,
}

/// The emit options bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitOptions {
    pub emit_metadata_only: bool,
    pub tolerate_errors: bool,
    pub include_private_members: bool,
    /// Instrumentation kinds in caller order.
    pub instrumentation_kinds: Vec<InstrumentationKind>,
    pub subsystem_version: Option<SubsystemVersion>,
    pub file_alignment: u32,
    pub high_entropy_virtual_address_space: bool,
    pub base_address: u64,
    pub debug_information_format: DebugInformationFormat,
    /// Output file name override. Path-like: subject to path redaction.
    pub output_name_override: Option<String>,
    /// PDB path embedded in the binary. Path-like: subject to path redaction.
    pub pdb_file_path: Option<String>,
    pub pdb_checksum_algorithm: SourceHashAlgorithm,
    pub runtime_metadata_version: Option<String>,
    /// Encoding name used for sources that carry no encoding of their own.
    pub default_source_file_encoding: Option<String>,
    pub fallback_source_file_encoding: Option<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            emit_metadata_only: false,
            tolerate_errors: false,
            include_private_members: true,
            instrumentation_kinds: Vec::new(),
            subsystem_version: None,
            file_alignment: 0,
            high_entropy_virtual_address_space: false,
            base_address: 0,
            debug_information_format: DebugInformationFormat::PortablePdb,
            output_name_override: None,
            pdb_file_path: None,
            pdb_checksum_algorithm: SourceHashAlgorithm::Sha256,
            runtime_metadata_version: None,
            default_source_file_encoding: None,
            fallback_source_file_encoding: None,
        }
    }
}
