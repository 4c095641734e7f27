//! Which namespaces are eligible for generation.

use std::collections::BTreeSet;

use loomgen_model::Model;

/// Namespace prefixes owned by the schema IDL itself: its standard library
/// and vendor shape namespaces. Never generated in open mode.
pub const SYSTEM_NAMESPACE_PREFIXES: [&str; 2] = ["smithy.", "aws."];

/// Namespaces owned by the Loom runtime library. Code for these ships with
/// the library; generating them again would shadow it.
pub const LIBRARY_NAMESPACES: [&str; 2] = ["loom.api", "loom.meta"];

/// Compute the set of namespaces eligible for generation.
///
/// With an allow-list present, eligibility is the intersection of the
/// allow-list with the model's namespaces. In open mode (no allow-list),
/// every namespace the model contributes is eligible except system and
/// library-owned ones. Both modes then subtract the explicit exclusions and
/// the namespaces already generated by upstream artifacts.
///
/// Never fails; an empty result means there is nothing to generate. The
/// returned set iterates lexicographically, which downstream stages rely on
/// for reproducible output.
pub fn resolve(
    model: &Model,
    allowed: Option<&BTreeSet<String>>,
    excluded: Option<&BTreeSet<String>>,
    already_generated: &BTreeSet<String>,
) -> BTreeSet<String> {
    let model_namespaces = model.namespaces();

    let candidates: BTreeSet<String> = match allowed {
        Some(allowed) => allowed
            .iter()
            .filter(|ns| model_namespaces.contains(*ns))
            .cloned()
            .collect(),
        None => model_namespaces
            .into_iter()
            .filter(|ns| !is_system_namespace(ns))
            .filter(|ns| !is_library_namespace(ns))
            .collect(),
    };

    candidates
        .into_iter()
        .filter(|ns| excluded.is_none_or(|excluded| !excluded.contains(ns)))
        .filter(|ns| !already_generated.contains(ns))
        .collect()
}

fn is_system_namespace(namespace: &str) -> bool {
    SYSTEM_NAMESPACE_PREFIXES
        .iter()
        .any(|prefix| namespace.starts_with(prefix))
}

fn is_library_namespace(namespace: &str) -> bool {
    LIBRARY_NAMESPACES
        .iter()
        .any(|owned| namespace == *owned || namespace.starts_with(&format!("{owned}.")))
}
