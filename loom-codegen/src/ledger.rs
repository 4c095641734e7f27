//! Namespaces already generated by upstream dependency artifacts.

use std::collections::{BTreeMap, BTreeSet};

use loomgen_model::{Model, manifests_from_model};

use crate::error::{Error, Result};

/// Scan the model for generation manifests left by upstream artifacts and
/// return the set of namespaces that must be skipped.
///
/// A namespace claimed by more than one manifest is a fatal configuration
/// error: it means the same types would be emitted into two different
/// compiled artifacts, producing ambiguous symbol resolution downstream.
/// This check is a global precondition of generation and must succeed
/// before any rendering starts.
pub fn scan_manifests(model: &Model) -> Result<BTreeSet<String>> {
    let manifests = manifests_from_model(model);

    let mut claimed_by: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for manifest in &manifests {
        for namespace in &manifest.namespaces {
            claimed_by
                .entry(namespace.as_str())
                .or_default()
                .push(manifest.artifact.as_str());
        }
    }

    for (namespace, artifacts) in &claimed_by {
        if artifacts.len() > 1 {
            return Err(Error::DuplicateManifestNamespace {
                namespace: namespace.to_string(),
                artifacts: artifacts.join(", "),
            });
        }
    }

    Ok(claimed_by.keys().map(|ns| ns.to_string()).collect())
}
