//! Metadata references.
//!
//! Reference kinds are a closed enum. The key schema describes exactly one
//! kind today (portable-executable images); everything else is
//! [`MetadataReference::Unsupported`] and fails key generation loudly.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

symbolic_enum! {
    /// Whether a reference names an assembly or a bare module.
    #[derive(Default)]
    pub enum MetadataImageKind {
        #[default]
        Assembly,
        Module,
    }
}

/// Four-part assembly version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AssemblyVersion {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl AssemblyVersion {
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// The assembly definition row of a manifest module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyDefinition {
    /// Simple name (e.g. `"System.Runtime"`).
    pub name: String,
    pub version: AssemblyVersion,
    /// Full public key bytes; empty for unsigned assemblies.
    pub public_key: Vec<u8>,
}

/// Metadata of a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMetadata {
    pub name: String,
    /// Module version id stamped into the image.
    pub mvid: Uuid,
    /// Present only for manifest modules.
    pub assembly: Option<AssemblyDefinition>,
}

/// Metadata of an assembly image: its modules, manifest module first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyMetadata {
    pub modules: Vec<ModuleMetadata>,
}

/// Metadata backing a PE reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    Assembly(AssemblyMetadata),
    Module(ModuleMetadata),
}

/// How a reference is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceProperties {
    /// Whether the image is consumed as an assembly or a bare module.
    pub kind: MetadataImageKind,
    /// `/link`: embed interop types instead of referencing them.
    pub embed_interop_types: bool,
    /// Extern aliases, in caller order.
    pub aliases: Vec<String>,
}

impl ReferenceProperties {
    /// Plain assembly reference, no aliases.
    #[must_use]
    pub fn assembly() -> Self {
        Self::default()
    }

    /// Plain module reference.
    #[must_use]
    pub fn module() -> Self {
        Self {
            kind: MetadataImageKind::Module,
            ..Self::default()
        }
    }
}

/// A reference backed by a portable-executable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeReference {
    /// Where the image was loaded from. Never part of the key.
    pub file_path: Option<String>,
    pub properties: ReferenceProperties,
    /// `None` when the image could not be read as metadata.
    pub metadata: Option<Metadata>,
}

impl PeReference {
    /// An assembly reference with a single manifest module.
    #[must_use]
    pub fn assembly(file_path: Option<&str>, module: ModuleMetadata) -> Self {
        Self {
            file_path: file_path.map(str::to_string),
            properties: ReferenceProperties::assembly(),
            metadata: Some(Metadata::Assembly(AssemblyMetadata {
                modules: vec![module],
            })),
        }
    }

    /// Description used in error messages: the file path when known,
    /// otherwise the first module name.
    #[must_use]
    pub fn display(&self) -> String {
        if let Some(path) = &self.file_path {
            return path.clone();
        }
        match &self.metadata {
            Some(Metadata::Module(m)) => m.name.clone(),
            Some(Metadata::Assembly(a)) => a
                .modules
                .first()
                .map_or_else(|| "<empty assembly>".to_string(), |m| m.name.clone()),
            None => "<no metadata>".to_string(),
        }
    }
}

/// A metadata reference of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataReference {
    PortableExecutable(PeReference),
    /// A reference kind the key schema cannot describe (e.g. an in-memory
    /// compilation reference).
    Unsupported { display: String },
}

impl From<PeReference> for MetadataReference {
    fn from(value: PeReference) -> Self {
        Self::PortableExecutable(value)
    }
}
