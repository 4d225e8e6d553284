// crates/clear-attribute-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI Catalog Tests
// Description: Unit tests for catalog shape and placeholder substitution.
// Purpose: Ensure every message key is unique and renders cleanly.
// Dependencies: clear-attribute-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies catalog keys are unique, placeholders are well formed, and the
//! status line templates render the expected operator text.

use std::collections::BTreeSet;

use crate::i18n::CATALOG;
use crate::i18n::MessageArg;
use crate::i18n::catalog;
use crate::i18n::translate;

fn placeholder_names(template: &str) -> Result<BTreeSet<String>, String> {
    let mut names = BTreeSet::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1 ..];
        let Some(end) = after.find('}') else {
            return Err(format!("unclosed '{{' in {template:?}"));
        };
        let name = &after[.. end];
        if name.is_empty() || !name.chars().all(|ch| ch.is_ascii_lowercase() || ch == '_') {
            return Err(format!("placeholder '{name}' must use [a-z_]"));
        }
        names.insert(name.to_string());
        rest = &after[end + 1 ..];
    }
    if rest.contains('}') {
        return Err(format!("unmatched '}}' in {template:?}"));
    }
    Ok(names)
}

#[test]
fn catalog_keys_are_unique() {
    let keys: BTreeSet<&str> = CATALOG.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), CATALOG.len());
    assert_eq!(catalog().len(), CATALOG.len());
}

#[test]
fn catalog_templates_have_valid_placeholders() {
    for (key, template) in CATALOG {
        placeholder_names(template)
            .unwrap_or_else(|error| panic!("invalid template for key '{key}': {error}"));
    }
}

#[test]
fn setting_line_substitutes_id_and_table() {
    let output = translate(
        "null.setting",
        vec![MessageArg::new("id", "42"), MessageArg::new("table", "catalog_product_entity_decimal")],
    );
    assert_eq!(output, "Setting ID 42 to NULL in catalog_product_entity_decimal");
}

#[test]
fn failure_line_keeps_legacy_separator() {
    assert_eq!(
        crate::t!("null.failed", error = "deadlock"),
        "Problem setting values to NULL : deadlock"
    );
}

#[test]
fn unknown_key_falls_back_to_key() {
    assert_eq!(translate("missing.key", Vec::new()), "missing.key");
}
