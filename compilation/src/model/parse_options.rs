//! Parse options bundle (per syntax tree).

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::options::Language;

symbolic_enum! {
    /// Whether a tree was parsed as a regular file or a script.
    #[derive(Default)]
    pub enum SourceCodeKind {
        #[default]
        Regular,
        Script,
    }
}

symbolic_enum! {
    /// How documentation comments are processed.
    #[derive(Default)]
    pub enum DocumentationMode {
        None,
        #[default]
        Parse,
        Diagnose,
    }
}

/// A language version as specified on the command line, or as resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LanguageVersion {
    /// Latest major version (unresolved).
    #[default]
    Default,
    /// Latest version, including minor releases (unresolved).
    Latest,
    /// Latest major version (unresolved).
    LatestMajor,
    /// Preview features enabled.
    Preview,
    /// An explicit `major.minor` version.
    Version { major: u16, minor: u16 },
}

impl LanguageVersion {
    /// Latest stable version known for `language`.
    #[must_use]
    pub fn latest_for(language: Language) -> Self {
        match language {
            Language::CSharp => Self::Version {
                major: 12,
                minor: 0,
            },
            Language::VisualBasic => Self::Version {
                major: 16,
                minor: 9,
            },
        }
    }

    /// Resolve `Default` / `Latest` / `LatestMajor` to a concrete version.
    #[must_use]
    pub fn map_specified(self, language: Language) -> Self {
        match self {
            Self::Default | Self::Latest | Self::LatestMajor => Self::latest_for(language),
            other => other,
        }
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Latest => f.write_str("Latest"),
            Self::LatestMajor => f.write_str("LatestMajor"),
            Self::Preview => f.write_str("Preview"),
            Self::Version { major, minor } => write!(f, "{major}.{minor}"),
        }
    }
}

/// The parse options bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    pub kind: SourceCodeKind,
    /// Version as the caller specified it.
    pub specified_language_version: LanguageVersion,
    /// Version actually in effect.
    pub language_version: LanguageVersion,
    pub documentation_mode: DocumentationMode,
    /// Preprocessor symbols in caller order. Not sorted, not deduplicated.
    pub preprocessor_symbols: Vec<String>,
    /// Feature flags in insertion order.
    pub features: IndexMap<String, String>,
    /// Language the tree was parsed as.
    pub language: Language,
}

impl ParseOptions {
    /// Options for `language` with `kind` and an unresolved `Default` version.
    #[must_use]
    pub fn new(language: Language, kind: SourceCodeKind) -> Self {
        Self::with_language_version(language, kind, LanguageVersion::Default)
    }

    /// Options with an explicit specified version; the effective version is
    /// resolved from it.
    #[must_use]
    pub fn with_language_version(
        language: Language,
        kind: SourceCodeKind,
        specified: LanguageVersion,
    ) -> Self {
        Self {
            kind,
            specified_language_version: specified,
            language_version: specified.map_specified(language),
            documentation_mode: DocumentationMode::Parse,
            preprocessor_symbols: Vec::new(),
            features: IndexMap::new(),
            language,
        }
    }

    /// Regular (non-script) C# options.
    #[must_use]
    pub fn csharp() -> Self {
        Self::new(Language::CSharp, SourceCodeKind::Regular)
    }
}
