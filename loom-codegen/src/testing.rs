//! Collaborator doubles for orchestration tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::BTreeSet,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use eyre::{Result, eyre};
use loomgen_model::{Model, Shape, ShapeId, ShapeKind};

use crate::{
    args::CodegenArgs,
    toolchain::{
        ApiDescription, CompileSchema, CompiledSchema, DescribeApi, LoadModel, Render,
        RenderedUnit,
    },
};

/// Build a model with one structure shape per namespace.
pub fn model_with_namespaces(namespaces: &[&str]) -> Model {
    let mut model = Model::new();
    for namespace in namespaces {
        model.insert(
            ShapeId::new(*namespace, "Placeholder"),
            Shape::of_kind(ShapeKind::Structure),
        );
    }
    model
}

/// Loader that returns a fixed, pre-built model.
pub struct StaticLoader(pub Model);

impl LoadModel for StaticLoader {
    fn load(&self, _args: &CodegenArgs) -> Result<Model> {
        Ok(self.0.clone())
    }
}

/// Renderer producing one unit per namespace, named after the namespace's
/// last segment.
pub struct UnitRender {
    extension: &'static str,
}

impl UnitRender {
    pub fn new(extension: &'static str) -> Self {
        Self { extension }
    }
}

impl Render for UnitRender {
    fn extension(&self) -> &'static str {
        self.extension
    }

    fn render(&self, _model: &Model, namespace: &str) -> Result<Vec<RenderedUnit>> {
        let name = namespace.rsplit('.').next().unwrap_or(namespace);
        Ok(vec![RenderedUnit {
            namespace: namespace.to_string(),
            name: name.to_string(),
            content: format!("// generated for {namespace}\n"),
        }])
    }
}

/// Renderer spy that counts invocations before delegating.
pub struct CountingRender<R> {
    inner: R,
    calls: Arc<AtomicUsize>,
}

impl<R: Render> CountingRender<R> {
    pub fn new(inner: R) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl<R: Render> Render for CountingRender<R> {
    fn extension(&self) -> &'static str {
        self.inner.extension()
    }

    fn render(&self, model: &Model, namespace: &str) -> Result<Vec<RenderedUnit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.render(model, namespace)
    }
}

/// Renderer that always fails.
pub struct FailingRender;

impl Render for FailingRender {
    fn extension(&self) -> &'static str {
        "rs"
    }

    fn render(&self, _model: &Model, namespace: &str) -> Result<Vec<RenderedUnit>> {
        Err(eyre!("rendering failed for namespace '{namespace}'"))
    }
}

/// API-description converter returning fixed documents.
pub struct StaticApi(pub Vec<ApiDescription>);

impl DescribeApi for StaticApi {
    fn convert(
        &self,
        _model: &Model,
        _allowed: Option<&BTreeSet<String>>,
    ) -> Result<Vec<ApiDescription>> {
        Ok(self.0.clone())
    }
}

/// Binary-schema compiler returning fixed documents.
pub struct StaticSchema(pub Vec<CompiledSchema>);

impl CompileSchema for StaticSchema {
    fn compile(&self, _model: &Model) -> Result<Vec<CompiledSchema>> {
        Ok(self.0.clone())
    }
}
