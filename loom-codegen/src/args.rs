//! Configuration record for one generation invocation.

use std::{collections::BTreeSet, path::PathBuf};

/// Toggles disabling individual output pipelines.
///
/// All pipelines are enabled by default; each toggle is independent. Note
/// that skipping sources also suppresses the namespace-record side-artifact
/// except in the empty-input placeholder case (see [`crate::fanout`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipSet {
    /// Skip per-namespace source generation.
    pub sources: bool,
    /// Skip resource generation (namespace records).
    pub resources: bool,
    /// Skip API-description document generation.
    pub api_descriptions: bool,
    /// Skip binary-schema document generation.
    pub binary_schemas: bool,
}

/// Everything one generation run needs to know.
///
/// Constructed by the caller (typically lowered from a project config file)
/// and treated as read-only by the orchestration core.
#[derive(Debug, Clone, Default)]
pub struct CodegenArgs {
    /// Local model document locations.
    pub specs: Vec<PathBuf>,
    /// Dependency coordinates whose artifacts contribute model documents
    /// and generation records. Resolved by the loader collaborator.
    pub dependencies: Vec<String>,
    /// Repositories the loader may resolve dependency coordinates against.
    pub repositories: Vec<String>,
    /// Named model transformers applied by the loader after merging.
    pub transformers: Vec<String>,
    /// If present, only these namespaces are considered for generation.
    pub allowed_namespaces: Option<BTreeSet<String>>,
    /// Namespaces excluded from generation.
    pub excluded_namespaces: Option<BTreeSet<String>>,
    /// Pipeline toggles.
    pub skip: SkipSet,
    /// Destination directory for generated sources.
    pub output_dir: PathBuf,
    /// Destination directory for generated resources.
    pub resource_output_dir: PathBuf,
    /// Whether the loader should discover model documents inside local
    /// archives in addition to the explicit specs.
    pub discover_models: bool,
    /// Local archive directories contributing model documents and
    /// generation records.
    pub local_archives: Vec<PathBuf>,
}
