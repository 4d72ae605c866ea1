//! Shared helpers for detkey benchmark suites.

use detkey_compilation::model::analyzer::AnalyzerIdentity;
use detkey_compilation::model::emit_options::EmitOptions;
use detkey_compilation::model::options::{CompilationOptions, OutputKind, ReportDiagnostic};
use detkey_compilation::model::parse_options::ParseOptions;
use detkey_compilation::model::reference::{
    AssemblyDefinition, AssemblyVersion, MetadataReference, ModuleMetadata, PeReference,
};
use detkey_compilation::model::source::{SourceHashAlgorithm, SourceText, SyntaxTree};
use detkey_compilation::tool_versions::ToolVersions;
use detkey_compilation::{AdditionalInputs, CompilationSnapshot, KeyOptions};
use detkey_kernel::redaction::RedactionOptions;
use uuid::Uuid;

/// Shape of a synthetic project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectShape {
    pub trees: usize,
    pub references: usize,
    /// Bytes of source text per tree.
    pub tree_bytes: usize,
}

/// A project of roughly the given shape. Tree contents differ per index so
/// that checksums are distinct.
#[must_use]
pub fn synthetic_snapshot(shape: ProjectShape) -> CompilationSnapshot {
    let mut options = CompilationOptions::csharp(OutputKind::DynamicallyLinkedLibrary);
    options.deterministic = true;
    for i in 0..8 {
        options
            .specific_diagnostic_options
            .insert(format!("CS{:04}", 8600 + i), ReportDiagnostic::Warn);
    }

    let mut snapshot = CompilationSnapshot::new(options);
    snapshot.syntax_trees = (0..shape.trees)
        .map(|i| {
            let body = format!("// file {i}\n{}", "x".repeat(shape.tree_bytes));
            SyntaxTree::new(
                format!("/repo/src/Module{i}/File{i}.cs"),
                SourceText::new(body, Some("utf-8"), SourceHashAlgorithm::Sha256),
                ParseOptions::csharp(),
            )
        })
        .collect();
    snapshot.references = (0..shape.references).map(synthetic_reference).collect();
    snapshot
}

fn synthetic_reference(i: usize) -> MetadataReference {
    MetadataReference::from(PeReference::assembly(
        Some(&format!("/sdk/ref/Lib{i}.dll")),
        ModuleMetadata {
            name: format!("Lib{i}.dll"),
            mvid: Uuid::from_u128(u128::try_from(i).unwrap_or_default() + 1),
            assembly: Some(AssemblyDefinition {
                name: format!("Lib{i}"),
                version: AssemblyVersion::new(8, 0, 0, 0),
                public_key: vec![0xb0; 160],
            }),
        },
    ))
}

/// Side inputs with a handful of analyzers and default emit options.
#[must_use]
pub fn synthetic_inputs() -> AdditionalInputs {
    AdditionalInputs {
        additional_texts: Vec::new(),
        analyzers: (0..4)
            .map(|i| AnalyzerIdentity::new(format!("Analyzers.Rule{i}"), "Analyzers"))
            .collect(),
        generators: vec![AnalyzerIdentity::new("Generators.Json", "Generators")],
        emit_options: Some(EmitOptions::default()),
    }
}

/// Options with pinned tool versions, so benchmarks do not measure probing.
#[must_use]
pub fn bench_options(redaction: RedactionOptions) -> KeyOptions {
    KeyOptions {
        redaction,
        tool_versions: Some(ToolVersions::current()),
        ..KeyOptions::default()
    }
}
