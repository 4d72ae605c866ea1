//! Compiler inputs consumed by key generation.
//!
//! These types stand in for the compiler driver's own objects: option
//! bundles, source texts, metadata references, analyzer identities. They are
//! built by the caller and read-only during key generation.
//!
//! Option bundles derive `serde::Serialize` only to expose their field
//! inventory to schema-drift lock tests. That view is not the key format and
//! is not used by production serialization.

/// Declares a fieldless enum with a stable [`SymbolicName`] and an `ALL` list.
///
/// [`SymbolicName`]: detkey_kernel::canon::writer::SymbolicName
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &[$name] = &[
                $( Self::$variant, )+
            ];
        }

        impl detkey_kernel::canon::writer::SymbolicName for $name {
            fn symbolic_name(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }
    };
}

pub mod analyzer;
pub mod emit_options;
pub mod options;
pub mod parse_options;
pub mod reference;
pub mod snapshot;
pub mod source;
