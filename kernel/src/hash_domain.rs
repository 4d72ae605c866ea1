//! Typed domain separators for key digests.
//!
//! Every digest computation MUST select a domain via [`HashDomain`]. This
//! module is the single authority for domain-separator byte strings. Adding a
//! new domain is a single change here: the enum, `as_bytes()`, `ALL`, and
//! `Display` are all generated from the same macro invocation.
//!
//! The trailing `::V1` is the key schema version. A schema change that alters
//! key text for unchanged inputs bumps every domain, so digests produced under
//! different schemas never compare equal.

/// Key schema version bound into every domain separator.
pub const KEY_SCHEMA_VERSION: u32 = 1;

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`crate::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Whole-compilation key (`build_key`).
    CompilationKey => b"DETKEY::COMPILATION_KEY::V1\0",

    /// Emit-options slice key (`build_emit_options_key`).
    EmitOptionsKey => b"DETKEY::EMIT_OPTIONS_KEY::V1\0",
}
