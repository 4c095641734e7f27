//! Multi-target code generation orchestration for Loom schema models.
//!
//! Given a resolved [`Model`](loomgen_model::Model), this crate decides which
//! namespaces are generated, fans out over the configured output pipelines
//! (source code, API-description documents, binary-schema documents), and
//! reconciles their outputs into one conflict-free artifact set committed to
//! disk in a single pass.
//!
//! The renderers themselves are external collaborators reached through the
//! trait seams in [`toolchain`]; this crate owns only the selection,
//! deduplication-boundary, and fan-out/fan-in logic.
//!
//! # Module Organization
//!
//! - [`args`] - The configuration record driving one invocation
//! - [`resolver`] - Which namespaces are eligible for generation
//! - [`ledger`] - Namespaces already generated by upstream artifacts
//! - [`toolchain`] - Collaborator trait seams (renderer, converters, loader)
//! - [`fanout`] - Per-namespace and whole-model pipeline invocation
//! - [`entry`] - Artifact entries and the unified result set
//! - [`commit`] - Idempotent filesystem writes
//! - [`testing`] - Collaborator doubles (feature-gated)

pub mod args;
pub mod commit;
pub mod entry;
mod error;
pub mod fanout;
mod generate;
pub mod ledger;
pub mod resolver;
pub mod toolchain;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use args::{CodegenArgs, SkipSet};
pub use commit::write;
pub use entry::{CodegenEntry, CodegenResult, unify};
pub use error::{Error, Result};
pub use fanout::fan_out;
pub use generate::{dump_model, generate};
pub use ledger::scan_manifests;
pub use resolver::resolve;
pub use toolchain::{
    ApiDescription, CompileSchema, CompiledSchema, DescribeApi, LoadModel, Render, RenderedUnit,
    Toolchain,
};
