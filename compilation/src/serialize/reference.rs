//! Metadata reference serializer.
//!
//! A reference's identity is carried entirely by name, version, public key
//! and MVID. Its file path never reaches the key.

use detkey_kernel::canon::writer::CanonicalWriter;

use crate::error::KeyError;
use crate::model::reference::{
    Metadata, MetadataReference, ModuleMetadata, PeReference, ReferenceProperties,
};
use crate::serialize::write_str_array;

/// Reference property fields written to the key, in order. `aliases` is
/// omitted when empty.
pub const PROPERTIES_INCLUDED_FIELDS: &[&str] = &["kind", "embedInteropTypes", "aliases"];

/// Reference property fields deliberately left out of the key.
pub const PROPERTIES_EXCLUDED_FIELDS: &[&str] = &[];

/// A reference that has been classified and reduced to its single module.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedReference<'a> {
    pub reference: &'a PeReference,
    pub module: &'a ModuleMetadata,
}

/// Classify `reference` and select its single module.
///
/// # Errors
///
/// - [`KeyError::UnsupportedReference`] for non-PE reference kinds.
/// - [`KeyError::MissingModuleMetadata`] when the image has no metadata, or an
///   assembly image has no modules.
/// - [`KeyError::MultiModuleAssembly`] when an assembly image has more than
///   one module. No module is picked silently.
pub fn resolve_reference(reference: &MetadataReference) -> Result<ResolvedReference<'_>, KeyError> {
    let pe = match reference {
        MetadataReference::PortableExecutable(pe) => pe,
        MetadataReference::Unsupported { display } => {
            return Err(KeyError::UnsupportedReference {
                display: display.clone(),
            });
        }
    };
    let module = match &pe.metadata {
        Some(Metadata::Module(module)) => module,
        Some(Metadata::Assembly(assembly)) => match assembly.modules.as_slice() {
            [module] => module,
            [] => {
                return Err(KeyError::MissingModuleMetadata {
                    reference: pe.display(),
                });
            }
            modules => {
                return Err(KeyError::MultiModuleAssembly {
                    reference: pe.display(),
                    module_count: modules.len(),
                });
            }
        },
        None => {
            return Err(KeyError::MissingModuleMetadata {
                reference: pe.display(),
            });
        }
    };
    Ok(ResolvedReference {
        reference: pe,
        module,
    })
}

/// `{name, version, publicKey, mvid, properties}`.
///
/// A module with no assembly row omits `name`, `version` and `publicKey`.
/// `aliases` is omitted when empty: no aliases and an empty alias list are the
/// same state.
pub fn write_reference(w: &mut CanonicalWriter, resolved: ResolvedReference<'_>) {
    let ResolvedReference { reference, module } = resolved;
    w.write_object_start();
    if let Some(assembly) = &module.assembly {
        w.write_str("name", &assembly.name);
        w.write_str("version", &assembly.version.to_string());
        w.write_bytes("publicKey", &assembly.public_key);
    }
    w.write_str("mvid", &module.mvid.hyphenated().to_string());

    w.write_key("properties");
    w.write_object_start();
    write_reference_properties(w, &reference.properties);
    w.write_object_end();

    w.write_object_end();
}

fn write_reference_properties(w: &mut CanonicalWriter, properties: &ReferenceProperties) {
    let ReferenceProperties {
        kind,
        embed_interop_types,
        aliases,
    } = properties;
    w.write_enum("kind", kind);
    w.write_bool("embedInteropTypes", *embed_interop_types);
    if !aliases.is_empty() {
        write_str_array(w, "aliases", aliases);
    }
}
