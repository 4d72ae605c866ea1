//! Schema drift lock: every bundle field is accounted for.
//!
//! Proves, per bundle:
//! 1. The field inventory has the locked count (catches a new field)
//! 2. Inventory = included ∪ excluded, with no overlap
//! 3. Included fields are written in declaration order
//!
//! A failure here means a field was added or renamed without deciding whether
//! it reaches the key. Decide, update the serializer and its field lists, then
//! bump the count.

use std::collections::BTreeSet;

use detkey_compilation::model::emit_options::EmitOptions;
use detkey_compilation::model::options::{
    CSharpOptions, CompilationOptions, OutputKind, VisualBasicOptions,
};
use detkey_compilation::model::parse_options::ParseOptions;
use detkey_compilation::model::reference::ReferenceProperties;
use detkey_compilation::serialize::{emit_options, options, parse_options, reference};
use lock_tests::fixtures::field_inventory;

fn assert_accounted(
    bundle: &str,
    inventory: &[String],
    expected_count: usize,
    included: &[&str],
    excluded: &[&str],
) {
    assert_eq!(
        inventory.len(),
        expected_count,
        "{bundle}: expected {expected_count} fields, found {inventory:?}; \
         if you added a field, decide include/exclude and update this count"
    );

    let inc: BTreeSet<&str> = included.iter().copied().collect();
    let exc: BTreeSet<&str> = excluded.iter().copied().collect();
    assert_eq!(inc.len(), included.len(), "{bundle}: duplicate included field");
    assert_eq!(exc.len(), excluded.len(), "{bundle}: duplicate excluded field");
    assert!(
        inc.is_disjoint(&exc),
        "{bundle}: fields both included and excluded: {:?}",
        inc.intersection(&exc).collect::<Vec<_>>()
    );

    let actual: BTreeSet<&str> = inventory.iter().map(String::as_str).collect();
    let declared: BTreeSet<&str> = inc.union(&exc).copied().collect();
    assert_eq!(
        actual, declared,
        "{bundle}: field inventory and include/exclude lists disagree"
    );

    let included_in_declaration_order: Vec<&str> = inventory
        .iter()
        .map(String::as_str)
        .filter(|f| inc.contains(f))
        .collect();
    assert_eq!(
        included_in_declaration_order, included,
        "{bundle}: included fields must be written in declaration order"
    );
}

#[test]
fn compilation_options_fields_accounted() {
    let inventory = field_inventory(&CompilationOptions::csharp(OutputKind::ConsoleApplication));
    assert_accounted(
        "CompilationOptions",
        &inventory,
        31,
        options::INCLUDED_FIELDS,
        options::EXCLUDED_FIELDS,
    );
    assert_eq!(options::INCLUDED_FIELDS.len(), 22);
    assert_eq!(options::EXCLUDED_FIELDS.len(), 9);
}

#[test]
fn csharp_extension_fields_accounted() {
    let inventory = field_inventory(&CSharpOptions::default());
    assert_accounted("CSharpOptions", &inventory, 3, options::CSHARP_FIELDS, &[]);
}

#[test]
fn visual_basic_extension_fields_accounted() {
    let inventory = field_inventory(&VisualBasicOptions::default());
    assert_accounted(
        "VisualBasicOptions",
        &inventory,
        7,
        options::VISUAL_BASIC_FIELDS,
        &[],
    );
}

#[test]
fn parse_options_fields_accounted() {
    let inventory = field_inventory(&ParseOptions::csharp());
    assert_accounted(
        "ParseOptions",
        &inventory,
        7,
        parse_options::INCLUDED_FIELDS,
        parse_options::EXCLUDED_FIELDS,
    );
}

#[test]
fn emit_options_fields_accounted() {
    let inventory = field_inventory(&EmitOptions::default());
    assert_accounted(
        "EmitOptions",
        &inventory,
        15,
        emit_options::INCLUDED_FIELDS,
        emit_options::EXCLUDED_FIELDS,
    );
}

#[test]
fn reference_properties_fields_accounted() {
    let inventory = field_inventory(&ReferenceProperties::assembly());
    assert_accounted(
        "ReferenceProperties",
        &inventory,
        3,
        reference::PROPERTIES_INCLUDED_FIELDS,
        reference::PROPERTIES_EXCLUDED_FIELDS,
    );
}
