//! Generation manifests recorded by previously-run generation.
//!
//! When an upstream dependency artifact has already generated code for some
//! namespaces, it records them in its published artifact. A loader folds
//! those records into the model's metadata under the `generated` key, one
//! entry per artifact. The orchestrator reads them back here to decide which
//! namespaces must be skipped.

use serde_json::Value;

use crate::model::Model;

/// Metadata key under which generation records are stored.
pub const GENERATED_METADATA_KEY: &str = "generated";

/// A record of namespaces already generated by one upstream artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationManifest {
    /// Coordinate of the artifact that generated the namespaces.
    pub artifact: String,
    /// The namespaces the artifact generated code for.
    pub namespaces: Vec<String>,
}

/// Extract all generation manifests recorded in the model's metadata.
///
/// Returns one manifest per recorded artifact, sorted by artifact coordinate
/// for deterministic downstream reporting. Entries that are not namespace
/// strings are ignored.
pub fn manifests_from_model(model: &Model) -> Vec<GenerationManifest> {
    let Some(Value::Object(records)) = model.metadata.get(GENERATED_METADATA_KEY) else {
        return Vec::new();
    };

    let mut manifests: Vec<GenerationManifest> = records
        .iter()
        .map(|(artifact, namespaces)| GenerationManifest {
            artifact: artifact.clone(),
            namespaces: namespaces
                .as_array()
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(|entry| entry.as_str().map(str::to_owned))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    manifests.sort_by(|a, b| a.artifact.cmp(&b.artifact));
    manifests
}

/// Record namespaces generated by the given artifact into the model's
/// metadata, where [`manifests_from_model`] will find them.
pub fn record_generated<I, S>(model: &mut Model, artifact: &str, namespaces: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entries: Vec<Value> = namespaces
        .into_iter()
        .map(|ns| Value::String(ns.into()))
        .collect();

    let records = model
        .metadata
        .entry(GENERATED_METADATA_KEY.to_string())
        .or_insert_with(|| Value::Object(serde_json::Map::new()));

    if let Value::Object(map) = records {
        map.insert(artifact.to_string(), Value::Array(entries));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_metadata_yields_no_manifests() {
        let model = Model::new();
        assert!(manifests_from_model(&model).is_empty());
    }

    #[test]
    fn test_manifests_sorted_by_artifact() {
        let mut model = Model::new();
        record_generated(&mut model, "dep-b", ["y"]);
        record_generated(&mut model, "dep-a", ["x"]);

        let manifests = manifests_from_model(&model);
        assert_eq!(manifests.len(), 2);
        assert_eq!(manifests[0].artifact, "dep-a");
        assert_eq!(manifests[0].namespaces, vec!["x"]);
        assert_eq!(manifests[1].artifact, "dep-b");
    }

    #[test]
    fn test_non_string_entries_are_ignored() {
        let model = Model::from_json(
            r#"{ "shapes": {}, "metadata": { "generated": { "dep": ["x", 42, null] } } }"#,
        )
        .unwrap();

        let manifests = manifests_from_model(&model);
        assert_eq!(manifests[0].namespaces, vec!["x"]);
    }

    #[test]
    fn test_record_round_trips_through_document_form() {
        let mut model = Model::new();
        record_generated(&mut model, "dep-1", ["a.b", "c.d"]);

        let text = model.to_json_pretty().unwrap();
        let reloaded = Model::from_json(&text).unwrap();

        let manifests = manifests_from_model(&reloaded);
        assert_eq!(manifests[0].namespaces, vec!["a.b", "c.d"]);
    }
}
