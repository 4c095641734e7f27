//! The resolved model: shapes plus document metadata.

use std::collections::{BTreeSet, HashMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shape::{Shape, ShapeId, ShapeKind};

/// A fully resolved set of shapes, organized into namespaces.
///
/// Models are owned by the caller and read-only to the orchestration core.
/// The serde document form mirrors the on-disk JSON:
///
/// ```json
/// {
///   "shapes": { "a.b#City": { "type": "structure" } },
///   "metadata": { "generated": { "dep-1": ["x.y"] } }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    /// All shapes in the model, keyed by absolute id.
    #[serde(default)]
    pub shapes: IndexMap<ShapeId, Shape>,

    /// Document-level metadata carried alongside the shapes.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, Value>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a model document from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Serialize the model document to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Add a shape, replacing any previous definition of the same id.
    pub fn insert(&mut self, id: ShapeId, shape: Shape) {
        self.shapes.insert(id, shape);
    }

    /// Iterate over all shape ids in the model.
    pub fn shape_ids(&self) -> impl Iterator<Item = &ShapeId> {
        self.shapes.keys()
    }

    /// The distinct namespaces contributed by the model's shapes.
    pub fn namespaces(&self) -> BTreeSet<String> {
        self.shapes
            .keys()
            .map(|id| id.namespace().to_string())
            .collect()
    }

    /// Merge another model document into this one.
    ///
    /// Shapes defined in both documents keep the later definition. Metadata
    /// objects are merged key-by-key so that generation records from several
    /// dependency artifacts accumulate instead of clobbering each other.
    pub fn merge(&mut self, other: Model) {
        self.shapes.extend(other.shapes);

        for (key, value) in other.metadata {
            match (self.metadata.get_mut(&key), value) {
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    existing.extend(incoming);
                }
                (_, value) => {
                    self.metadata.insert(key, value);
                }
            }
        }
    }

    /// Flatten structural aliasing: rewrite every member reference through
    /// alias chains to the ultimate non-alias target, then drop the alias
    /// shapes themselves.
    ///
    /// Aliases pointing outside the model, and cyclic alias chains, keep the
    /// last reachable target rather than failing.
    pub fn flatten_aliases(&mut self) {
        let resolved: HashMap<ShapeId, ShapeId> = self
            .shapes
            .iter()
            .filter(|(_, shape)| shape.kind == ShapeKind::Alias)
            .filter_map(|(id, _)| {
                self.resolve_alias(id).map(|target| (id.clone(), target))
            })
            .collect();

        for shape in self.shapes.values_mut() {
            for member in shape.members.values_mut() {
                if let Some(target) = resolved.get(&member.target) {
                    member.target = target.clone();
                }
            }
        }

        self.shapes.retain(|_, shape| shape.kind != ShapeKind::Alias);
    }

    /// Follow an alias chain to its ultimate non-alias target.
    fn resolve_alias(&self, id: &ShapeId) -> Option<ShapeId> {
        let mut seen = HashSet::new();
        let mut current = id;

        loop {
            if !seen.insert(current.clone()) {
                // Cycle: stop at the last id reached before repeating.
                return Some(current.clone());
            }
            match self.shapes.get(current) {
                Some(shape) if shape.kind == ShapeKind::Alias => {
                    match &shape.target {
                        Some(target) => current = target,
                        None => return None,
                    }
                }
                _ => return Some(current.clone()),
            }
        }
    }
}
