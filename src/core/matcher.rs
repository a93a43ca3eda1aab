//! Selection matching
//!
//! Maps names typed by the user onto catalog names:
//! 1. Exact match
//! 2. Case-insensitive match, only when exactly one entry qualifies
//!
//! Anything else passes through untouched so the engine reports it as unknown.

use crate::config::catalog::Catalog;

pub fn resolve_name(catalog: &Catalog, input: &str) -> String {
    let input = input.trim();
    if catalog.get(input).is_some() {
        return input.to_string();
    }

    let mut matches = catalog
        .entries()
        .iter()
        .filter(|e| e.name.eq_ignore_ascii_case(input));

    match (matches.next(), matches.next()) {
        (Some(only), None) => only.name.clone(),
        _ => input.to_string(),
    }
}

/// Resolve every name, keeping the caller's order.
pub fn resolve_selection(catalog: &Catalog, inputs: &[String]) -> Vec<String> {
    inputs.iter().map(|i| resolve_name(catalog, i)).collect()
}
