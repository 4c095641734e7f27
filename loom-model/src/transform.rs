//! Named model transformers applied by loaders after merging documents.

use thiserror::Error;

use crate::model::Model;

/// Error returned when a requested transformer is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown model transformer '{0}'")]
pub struct UnknownTransformer(pub String);

/// A transformation applied to a model in place.
pub type Transformer = fn(&mut Model);

/// Look up a transformer by name.
pub fn lookup(name: &str) -> Option<Transformer> {
    match name {
        "flatten-aliases" => Some(flatten_aliases),
        "strip-docs" => Some(strip_docs),
        _ => None,
    }
}

/// Apply the named transformers to the model, in the order given.
pub fn apply<S: AsRef<str>>(model: &mut Model, names: &[S]) -> Result<(), UnknownTransformer> {
    for name in names {
        let name = name.as_ref();
        let transformer =
            lookup(name).ok_or_else(|| UnknownTransformer(name.to_string()))?;
        transformer(model);
    }
    Ok(())
}

fn flatten_aliases(model: &mut Model) {
    model.flatten_aliases();
}

fn strip_docs(model: &mut Model) {
    for shape in model.shapes.values_mut() {
        shape.docs = None;
    }
}
