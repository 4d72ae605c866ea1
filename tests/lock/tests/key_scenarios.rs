//! End-to-end key scenarios over pinned fixtures.
//!
//! Each test builds full keys through the public API and asserts on the
//! observable text, the way a build cache would consume it.

use detkey_compilation::model::options::{
    CompilationOptions, Language, OutputKind, ReportDiagnostic,
};
use detkey_compilation::model::parse_options::{ParseOptions, SourceCodeKind};
use detkey_compilation::model::reference::MetadataReference;
use detkey_compilation::model::source::{SourceHashAlgorithm, SourceText, SyntaxTree};
use detkey_compilation::{
    build_key, AdditionalInputs, CompilationKey, CompilationSnapshot, KeyError, KeyOptions,
};
use detkey_harness::first_divergence;
use detkey_kernel::path::PathMap;
use detkey_kernel::redaction::RedactionOptions;
use lock_tests::fixtures::{
    global_usings_snapshot, hello_world_snapshot, multi_module_reference, pinned_options,
    runtime_reference,
};
use serde_json::{json, Value};

fn key(snapshot: &CompilationSnapshot, options: &KeyOptions) -> CompilationKey {
    build_key(snapshot, &AdditionalInputs::default(), options).unwrap()
}

fn parse(key: &CompilationKey) -> Value {
    serde_json::from_str(key.as_str()).unwrap()
}

#[test]
fn minimal_compilation_scenario() {
    let k = key(
        &hello_world_snapshot(),
        &pinned_options(RedactionOptions::IGNORE_TOOL_VERSIONS),
    );
    let v = parse(&k);
    assert_eq!(v["compilation"]["options"]["outputKind"], "ConsoleApplication");
    assert_eq!(
        v["compilation"]["syntaxTrees"][0]["text"]["checksumAlgorithm"],
        "Sha256"
    );
    assert_eq!(v["compilation"]["references"], json!([]));
    assert_eq!(v["additionalTexts"], json!([]));
    assert_eq!(v["analyzers"], json!([]));
    assert_eq!(v["generators"], json!([]));
    assert_eq!(v["emitOptions"], json!({}));
}

#[test]
fn stable_for_equal_inputs() {
    let options = pinned_options(RedactionOptions::empty());
    let a = key(&hello_world_snapshot(), &options);
    let b = key(&hello_world_snapshot(), &options);
    assert_eq!(a.as_str(), b.as_str());
    assert_eq!(a.digest(), b.digest());
}

#[test]
fn global_usings_order_scenario() {
    let options = pinned_options(RedactionOptions::IGNORE_TOOL_VERSIONS);
    let forward = key(&global_usings_snapshot(&["System", "System.Xml"]), &options);
    let reversed = key(&global_usings_snapshot(&["System.Xml", "System"]), &options);
    assert_eq!(
        parse(&forward)["compilation"]["options"]["globalUsings"],
        json!(["System", "System.Xml"])
    );
    assert_eq!(
        parse(&reversed)["compilation"]["options"]["globalUsings"],
        json!(["System.Xml", "System"])
    );

    // The keys differ only inside the globalUsings array.
    let divergence = first_divergence(forward.as_str(), reversed.as_str()).unwrap();
    assert_eq!(divergence.expected.as_deref().map(str::trim), Some(r#""System","#));
    assert_eq!(divergence.actual.as_deref().map(str::trim), Some(r#""System.Xml","#));
    let differing: Vec<(&str, &str)> = forward
        .as_str()
        .lines()
        .zip(reversed.as_str().lines())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(differing.len(), 2, "{differing:?}");
    assert_eq!(forward.len(), reversed.len());
}

#[test]
fn order_sensitive_collections() {
    let options = pinned_options(RedactionOptions::IGNORE_TOOL_VERSIONS);

    let with_symbols = |symbols: &[&str]| {
        let mut s = hello_world_snapshot();
        s.syntax_trees[0].options.preprocessor_symbols =
            symbols.iter().map(|x| (*x).to_string()).collect();
        key(&s, &options)
    };
    assert_ne!(with_symbols(&["DEBUG", "TRACE"]), with_symbols(&["TRACE", "DEBUG"]));

    let with_diagnostics = |ids: &[&str]| {
        let mut s = hello_world_snapshot();
        for id in ids {
            s.options
                .specific_diagnostic_options
                .insert((*id).to_string(), ReportDiagnostic::Suppress);
        }
        key(&s, &options)
    };
    assert_ne!(
        with_diagnostics(&["CS0168", "CS0219"]),
        with_diagnostics(&["CS0219", "CS0168"])
    );

    let forward = {
        let mut s = hello_world_snapshot();
        s.references = vec![runtime_reference("/refs/System.Runtime.dll"), aliased_reference(&["a"])];
        key(&s, &options)
    };
    let reversed = {
        let mut s = hello_world_snapshot();
        s.references = vec![aliased_reference(&["a"]), runtime_reference("/refs/System.Runtime.dll")];
        key(&s, &options)
    };
    assert_ne!(forward, reversed);

    let with_aliases = |aliases: &[&str]| {
        let mut s = hello_world_snapshot();
        s.references.push(aliased_reference(aliases));
        key(&s, &options)
    };
    assert_ne!(with_aliases(&["a", "b"]), with_aliases(&["b", "a"]));
}

fn aliased_reference(aliases: &[&str]) -> MetadataReference {
    let mut reference = runtime_reference("/refs/Aliased.dll");
    if let MetadataReference::PortableExecutable(pe) = &mut reference {
        pe.properties.aliases = aliases.iter().map(|a| (*a).to_string()).collect();
    }
    reference
}

#[test]
fn tree_order_sensitivity() {
    let options = pinned_options(RedactionOptions::IGNORE_TOOL_VERSIONS);
    let mut snapshot = hello_world_snapshot();
    snapshot.syntax_trees.push(SyntaxTree::new(
        "/repo/src/Util.cs",
        SourceText::new("static class Util {}", Some("utf-8"), SourceHashAlgorithm::Sha256),
        ParseOptions::csharp(),
    ));
    let forward = key(&snapshot, &options);
    snapshot.syntax_trees.reverse();
    assert_ne!(forward, key(&snapshot, &options));
}

#[test]
fn path_redaction_scenario() {
    let relocate = |root: &str| {
        let mut s = hello_world_snapshot();
        s.syntax_trees[0].path = format!("{root}/src/Program.cs");
        s
    };
    let a = relocate("/home/dev/repo");
    let b = relocate("/agent/_work/7/s");

    let redacted = pinned_options(RedactionOptions::IGNORE_PATHS);
    assert_eq!(key(&a, &redacted), key(&b, &redacted));
    assert_eq!(
        parse(&key(&a, &redacted))["compilation"]["syntaxTrees"][0]["fileName"],
        "Program.cs"
    );

    // Without redaction the only difference is the root inside fileName.
    let precise = pinned_options(RedactionOptions::empty());
    let (ka, kb) = (key(&a, &precise), key(&b, &precise));
    let divergence = first_divergence(ka.as_str(), kb.as_str()).unwrap();
    let expected = divergence.expected.as_deref().unwrap();
    assert!(expected.contains("\"fileName\""), "{divergence:?}");
    assert!(expected.contains("/home/dev/repo"), "{divergence:?}");
    assert_eq!(
        ka.as_str().replace("/home/dev/repo", "/agent/_work/7/s"),
        kb.as_str()
    );
}

#[test]
fn path_map_scenario() {
    let relocate = |root: &str| {
        let mut s = hello_world_snapshot();
        s.syntax_trees[0].path = format!("{root}/src/Program.cs");
        s
    };
    let options_for = |root: &str| KeyOptions {
        path_map: PathMap::new([(root, "/_/")]),
        ..pinned_options(RedactionOptions::empty())
    };
    let a = key(&relocate("/home/dev/repo"), &options_for("/home/dev/repo"));
    let b = key(&relocate("/agent/_work/7/s"), &options_for("/agent/_work/7/s"));
    assert_eq!(a, b);
    assert_eq!(
        parse(&a)["compilation"]["syntaxTrees"][0]["fileName"],
        "/_/src/Program.cs"
    );
}

#[test]
fn tool_version_redaction_scenario() {
    let snapshot = hello_world_snapshot();
    let mut other_tools = pinned_options(RedactionOptions::IGNORE_TOOL_VERSIONS);
    if let Some(tools) = other_tools.tool_versions.as_mut() {
        tools.compiler_version = "9.9.9".to_string();
        tools.os_description = "windows".to_string();
    }
    assert_eq!(
        key(&snapshot, &pinned_options(RedactionOptions::IGNORE_TOOL_VERSIONS)),
        key(&snapshot, &other_tools)
    );

    let mut precise_other = other_tools.clone();
    precise_other.redaction = RedactionOptions::empty();
    assert_ne!(
        key(&snapshot, &pinned_options(RedactionOptions::empty())),
        key(&snapshot, &precise_other)
    );
}

#[test]
fn reference_path_invariance_scenario() {
    let options = pinned_options(RedactionOptions::empty());
    let mut a = hello_world_snapshot();
    a.references.push(runtime_reference("/usr/share/dotnet/packs/System.Runtime.dll"));
    let mut b = hello_world_snapshot();
    b.references.push(runtime_reference("C:\\Program Files\\dotnet\\System.Runtime.dll"));
    assert_eq!(key(&a, &options), key(&b, &options));
    assert!(!key(&a, &options).as_str().contains("/usr/share"));
}

#[test]
fn multi_module_rejection_scenario() {
    let mut snapshot = hello_world_snapshot();
    snapshot.references.push(multi_module_reference());
    let err = build_key(
        &snapshot,
        &AdditionalInputs::default(),
        &pinned_options(RedactionOptions::empty()),
    )
    .unwrap_err();
    assert_eq!(
        err,
        KeyError::MultiModuleAssembly {
            reference: "/refs/Split.dll".to_string(),
            module_count: 2,
        }
    );
}

#[test]
fn visual_basic_compilation_key() {
    let mut snapshot = CompilationSnapshot::new(
        CompilationOptions::visual_basic(OutputKind::DynamicallyLinkedLibrary),
    );
    snapshot.syntax_trees.push(SyntaxTree::new(
        "/repo/Module1.vb",
        SourceText::new("Module Module1\nEnd Module", None, SourceHashAlgorithm::Sha1),
        ParseOptions::new(Language::VisualBasic, SourceCodeKind::Regular),
    ));
    let v = parse(&key(&snapshot, &pinned_options(RedactionOptions::empty())));
    let options = &v["compilation"]["options"];
    assert_eq!(options["language"], "VisualBasic");
    assert_eq!(options["optionStrict"], "Off");
    assert_eq!(options["globalImports"], json!([]));
    assert!(options.get("globalUsings").is_none());
}
