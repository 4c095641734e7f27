//! Collaborator trait seams.
//!
//! The orchestrator coordinates external pipelines without knowing how they
//! work: a source renderer, an API-description converter, a binary-schema
//! compiler, and a model loader. Each seam is a trait here; implementations
//! live outside this crate (test doubles excepted).

use std::{collections::BTreeSet, path::PathBuf};

use eyre::Result;
use loomgen_model::Model;

use crate::args::CodegenArgs;

/// Per-namespace rendering output from the source pipeline.
///
/// Consumed only to compute a destination path: namespace segments become
/// directories, `<name>.<extension>` becomes the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    /// The namespace the unit was rendered from.
    pub namespace: String,
    /// Logical name of the unit, without extension.
    pub name: String,
    /// Rendered source text.
    pub content: String,
}

/// One API-description document produced for a service shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDescription {
    /// Namespace of the service.
    pub namespace: String,
    /// Name of the service.
    pub service: String,
    /// Document text.
    pub body: String,
}

/// One compiled binary-schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSchema {
    /// Destination path relative to the resource output directory.
    pub path: PathBuf,
    /// Compiled contents.
    pub contents: Vec<u8>,
}

/// The external IR-lowering + rendering pipeline.
///
/// A renderer may yield multiple units per namespace. Rendering failures
/// propagate unmodified; a partially-rendered namespace is not a safe
/// artifact to emit.
pub trait Render {
    /// File extension for rendered source files (e.g. "rs", "scala").
    fn extension(&self) -> &'static str;

    /// Render all units for one namespace of the model.
    fn render(&self, model: &Model, namespace: &str) -> Result<Vec<RenderedUnit>>;
}

/// The external API-description pipeline, invoked once over the whole model.
pub trait DescribeApi {
    /// Produce one document per service found, restricted to the allowed
    /// namespaces when a filter is present.
    fn convert(
        &self,
        model: &Model,
        allowed: Option<&BTreeSet<String>>,
    ) -> Result<Vec<ApiDescription>>;
}

/// The external binary-schema pipeline, invoked once over the whole model.
pub trait CompileSchema {
    /// Compile the model into zero or more documents at their reported
    /// relative paths.
    fn compile(&self, model: &Model) -> Result<Vec<CompiledSchema>>;
}

/// The external model loader.
///
/// Loading from raw schema-language files and remote dependency coordinates
/// is a collaborator concern; the orchestrator only consumes the resolved
/// [`Model`].
pub trait LoadModel {
    /// Load and merge the model described by the args, including generation
    /// records discovered in dependency artifacts.
    fn load(&self, args: &CodegenArgs) -> Result<Model>;

    /// Load without manifest-based namespace discovery. Used by diagnostic
    /// dumps, which must not be influenced by upstream generation records.
    fn load_bare(&self, args: &CodegenArgs) -> Result<Model> {
        self.load(args)
    }
}

/// The bundle of collaborators one generation run is wired with.
///
/// The renderer and loader are always required; the side-format pipelines
/// are optional and only run when both wired and enabled by the args.
pub struct Toolchain {
    /// Model loader.
    pub loader: Box<dyn LoadModel>,
    /// Source renderer.
    pub render: Box<dyn Render>,
    /// API-description converter, if any.
    pub api: Option<Box<dyn DescribeApi>>,
    /// Binary-schema compiler, if any.
    pub schema: Option<Box<dyn CompileSchema>>,
}

impl Toolchain {
    /// Create a toolchain with the required collaborators and no
    /// side-format pipelines.
    pub fn new(loader: impl LoadModel + 'static, render: impl Render + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            render: Box::new(render),
            api: None,
            schema: None,
        }
    }

    /// Wire an API-description converter.
    pub fn with_api(mut self, api: impl DescribeApi + 'static) -> Self {
        self.api = Some(Box::new(api));
        self
    }

    /// Wire a binary-schema compiler.
    pub fn with_schema(mut self, schema: impl CompileSchema + 'static) -> Self {
        self.schema = Some(Box::new(schema));
        self
    }
}
