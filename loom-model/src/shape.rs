//! Shape identifiers and shape definitions.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a textual shape id fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid shape id '{0}': expected '<namespace>#<name>'")]
pub struct InvalidShapeId(pub String);

/// Absolute identifier of a shape: a dotted namespace plus a name.
///
/// The textual form is `<namespace>#<name>`, e.g. `com.example.weather#City`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    name: String,
}

impl ShapeId {
    /// Create a shape id from a namespace and a name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// The dotted namespace this shape belongs to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The shape name within its namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace split into its dot-separated segments.
    pub fn namespace_segments(&self) -> impl Iterator<Item = &str> {
        self.namespace.split('.')
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)
    }
}

impl FromStr for ShapeId {
    type Err = InvalidShapeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('#') {
            Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
                Ok(Self::new(namespace, name))
            }
            _ => Err(InvalidShapeId(s.to_string())),
        }
    }
}

impl TryFrom<String> for ShapeId {
    type Error = InvalidShapeId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Structure,
    Union,
    Enum,
    Service,
    Operation,
    /// A transparent rename of another shape; flattened away before dumps.
    Alias,
    List,
    Map,
    String,
    Integer,
    Long,
    Double,
    Boolean,
    Timestamp,
    Blob,
    Document,
}

/// A reference from a member to its target shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    /// The shape this member points at.
    pub target: ShapeId,
}

impl MemberRef {
    /// Create a member reference to the given target.
    pub fn to(target: ShapeId) -> Self {
        Self { target }
    }
}

/// A typed schema element.
///
/// Shapes carry only what the orchestrator needs: their kind, their member
/// references (used when flattening aliases), an alias target for
/// [`ShapeKind::Alias`] shapes, and optional documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// The shape kind.
    #[serde(rename = "type")]
    pub kind: ShapeKind,

    /// Member references, keyed by member name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: IndexMap<String, MemberRef>,

    /// Target of an alias shape. Only meaningful for [`ShapeKind::Alias`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ShapeId>,

    /// Documentation attached to the shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl Shape {
    /// Create a shape of the given kind with no members.
    pub fn of_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            members: IndexMap::new(),
            target: None,
            docs: None,
        }
    }

    /// Create an alias shape pointing at the given target.
    pub fn alias(target: ShapeId) -> Self {
        Self {
            kind: ShapeKind::Alias,
            members: IndexMap::new(),
            target: Some(target),
            docs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_id_parse() {
        let id: ShapeId = "com.example#City".parse().unwrap();
        assert_eq!(id.namespace(), "com.example");
        assert_eq!(id.name(), "City");
        assert_eq!(id.to_string(), "com.example#City");
    }

    #[test]
    fn test_shape_id_rejects_malformed() {
        assert!("noseparator".parse::<ShapeId>().is_err());
        assert!("#Name".parse::<ShapeId>().is_err());
        assert!("ns#".parse::<ShapeId>().is_err());
    }

    #[test]
    fn test_shape_id_namespace_segments() {
        let id = ShapeId::new("com.example.weather", "City");
        let segments: Vec<_> = id.namespace_segments().collect();
        assert_eq!(segments, vec!["com", "example", "weather"]);
    }

    #[test]
    fn test_shape_id_serde_round_trip() {
        let id = ShapeId::new("a.b", "Foo");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"a.b#Foo\"");

        let back: ShapeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_shape_document_form() {
        let json = r#"{
            "type": "structure",
            "members": { "city": { "target": "a.b#City" } }
        }"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.kind, ShapeKind::Structure);
        assert_eq!(shape.members["city"].target, ShapeId::new("a.b", "City"));
    }
}
