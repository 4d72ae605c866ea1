//! Compilation options bundle.
//!
//! A flat record of common fields plus a language-specific extension
//! ([`LanguageOptions`]). Which fields reach the key is decided field by field
//! in [`crate::serialize::options`]; this module only describes the data.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

symbolic_enum! {
    /// Kind of binary a compilation produces.
    pub enum OutputKind {
        ConsoleApplication,
        WindowsApplication,
        DynamicallyLinkedLibrary,
        NetModule,
        WindowsRuntimeMetadata,
        WindowsRuntimeApplication,
    }
}

symbolic_enum! {
    /// Target platform.
    #[derive(Default)]
    pub enum Platform {
        #[default]
        AnyCpu,
        AnyCpu32BitPreferred,
        X86,
        X64,
        Arm,
        Arm64,
        Itanium,
    }
}

symbolic_enum! {
    /// Code generation optimization level.
    #[derive(Default)]
    pub enum OptimizationLevel {
        #[default]
        Debug,
        Release,
    }
}

symbolic_enum! {
    /// Diagnostic severity override.
    #[derive(Default)]
    pub enum ReportDiagnostic {
        #[default]
        Default,
        Error,
        Warn,
        Info,
        Hidden,
        Suppress,
    }
}

symbolic_enum! {
    /// Nullable analysis context.
    #[derive(Default)]
    pub enum NullableContextOptions {
        #[default]
        Disable,
        Warnings,
        Annotations,
        Enable,
    }
}

symbolic_enum! {
    /// Which members of referenced metadata are imported.
    #[derive(Default)]
    pub enum MetadataImportOptions {
        #[default]
        Public,
        Internal,
        All,
    }
}

symbolic_enum! {
    /// Source language of a compilation.
    pub enum Language {
        CSharp,
        VisualBasic,
    }
}

symbolic_enum! {
    /// Visual Basic `Option Strict` setting.
    #[derive(Default)]
    pub enum OptionStrict {
        #[default]
        Off,
        Custom,
        On,
    }
}

/// Behavior hook installed on a compilation (resolvers, providers,
/// comparers).
///
/// Hooks are behavior, not data: their effects reach the key through the
/// files and references they resolve to, never by serializing the hook.
pub trait BehaviorHook: fmt::Debug + Send + Sync {
    /// Human-readable name, for diagnostics only.
    fn name(&self) -> &str;
}

/// Shared handle to an installed hook.
pub type HookHandle = Arc<dyn BehaviorHook>;

/// Field inventory view of a hook: whether one is installed.
fn hook_presence<S: Serializer>(hook: &Option<HookHandle>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_bool(hook.is_some())
}

/// C# extension fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CSharpOptions {
    /// `/unsafe`.
    pub allow_unsafe: bool,
    /// Internal binder flags (raw bits).
    pub top_level_binder_flags: u32,
    /// Global usings, in declaration order.
    pub global_usings: Vec<String>,
}

/// Visual Basic extension fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualBasicOptions {
    /// `/rootnamespace`; empty when unset.
    pub root_namespace: String,
    /// `Option Strict` project default.
    pub option_strict: OptionStrict,
    /// `Option Infer` project default.
    pub option_infer: bool,
    /// `Option Explicit` project default.
    pub option_explicit: bool,
    /// `Option Compare Text` when set, binary comparison otherwise.
    pub option_compare_text: bool,
    /// `/vbruntime*`: embed the core runtime instead of referencing it.
    pub embed_vb_core_runtime: bool,
    /// Global imports, in declaration order.
    pub global_imports: Vec<String>,
}

impl Default for VisualBasicOptions {
    fn default() -> Self {
        Self {
            root_namespace: String::new(),
            option_strict: OptionStrict::Off,
            option_infer: true,
            option_explicit: true,
            option_compare_text: false,
            embed_vb_core_runtime: false,
            global_imports: Vec::new(),
        }
    }
}

/// Language-specific extension record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LanguageOptions {
    CSharp(CSharpOptions),
    VisualBasic(VisualBasicOptions),
}

impl LanguageOptions {
    /// The language this extension belongs to.
    #[must_use]
    pub fn language(&self) -> Language {
        match self {
            Self::CSharp(_) => Language::CSharp,
            Self::VisualBasic(_) => Language::VisualBasic,
        }
    }
}

/// The compilation options bundle.
///
/// Construct with [`CompilationOptions::new`] (or the per-language helpers)
/// and adjust public fields with struct-update syntax.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationOptions {
    pub output_kind: OutputKind,
    pub module_name: Option<String>,
    pub script_class_name: String,
    pub main_type_name: Option<String>,
    pub crypto_public_key: Vec<u8>,
    pub crypto_key_file: Option<String>,
    pub crypto_key_container: Option<String>,
    pub delay_sign: Option<bool>,
    pub public_sign: bool,
    pub check_overflow: bool,
    pub platform: Platform,
    pub optimization_level: OptimizationLevel,
    pub debug_plus_mode: bool,
    pub general_diagnostic_option: ReportDiagnostic,
    pub warning_level: i32,
    pub deterministic: bool,
    pub references_supersede_lower_versions: bool,
    pub report_suppressed_diagnostics: bool,
    pub metadata_import_options: MetadataImportOptions,
    pub nullable_context_options: NullableContextOptions,
    /// Per-diagnostic severity overrides, in insertion order.
    pub specific_diagnostic_options: IndexMap<String, ReportDiagnostic>,
    pub language: LanguageOptions,

    /// Parallelism hint.
    pub concurrent_build: bool,
    /// Wall-clock time used by `__DATE__`-style features in scripting hosts.
    pub current_local_time: Option<SystemTime>,
    /// Culture diagnostics are reported in.
    pub ui_culture: Option<String>,
    #[serde(serialize_with = "hook_presence")]
    pub xml_reference_resolver: Option<HookHandle>,
    #[serde(serialize_with = "hook_presence")]
    pub source_reference_resolver: Option<HookHandle>,
    #[serde(serialize_with = "hook_presence")]
    pub metadata_reference_resolver: Option<HookHandle>,
    #[serde(serialize_with = "hook_presence")]
    pub assembly_identity_comparer: Option<HookHandle>,
    #[serde(serialize_with = "hook_presence")]
    pub strong_name_provider: Option<HookHandle>,
    #[serde(serialize_with = "hook_presence")]
    pub syntax_tree_options_provider: Option<HookHandle>,
}

impl CompilationOptions {
    /// Options with compiler defaults for `output_kind` and `language`.
    #[must_use]
    pub fn new(output_kind: OutputKind, language: LanguageOptions) -> Self {
        let warning_level = match language.language() {
            Language::CSharp => 4,
            Language::VisualBasic => 1,
        };
        Self {
            output_kind,
            module_name: None,
            script_class_name: "Script".to_string(),
            main_type_name: None,
            crypto_public_key: Vec::new(),
            crypto_key_file: None,
            crypto_key_container: None,
            delay_sign: None,
            public_sign: false,
            check_overflow: false,
            platform: Platform::AnyCpu,
            optimization_level: OptimizationLevel::Debug,
            debug_plus_mode: false,
            general_diagnostic_option: ReportDiagnostic::Default,
            warning_level,
            deterministic: false,
            references_supersede_lower_versions: false,
            report_suppressed_diagnostics: false,
            metadata_import_options: MetadataImportOptions::Public,
            nullable_context_options: NullableContextOptions::Disable,
            specific_diagnostic_options: IndexMap::new(),
            language,
            concurrent_build: true,
            current_local_time: None,
            ui_culture: None,
            xml_reference_resolver: None,
            source_reference_resolver: None,
            metadata_reference_resolver: None,
            assembly_identity_comparer: None,
            strong_name_provider: None,
            syntax_tree_options_provider: None,
        }
    }

    /// C# options with default extension fields.
    #[must_use]
    pub fn csharp(output_kind: OutputKind) -> Self {
        Self::new(output_kind, LanguageOptions::CSharp(CSharpOptions::default()))
    }

    /// Visual Basic options with default extension fields.
    #[must_use]
    pub fn visual_basic(output_kind: OutputKind) -> Self {
        Self::new(
            output_kind,
            LanguageOptions::VisualBasic(VisualBasicOptions::default()),
        )
    }

    /// The compilation's language.
    #[must_use]
    pub fn language_kind(&self) -> Language {
        self.language.language()
    }
}
