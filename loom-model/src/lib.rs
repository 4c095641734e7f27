//! Resolved schema model types for the Loom code generation orchestrator.
//!
//! This crate provides the unified type definitions shared across the Loom
//! generation pipeline. A [`Model`] is the already-resolved set of typed
//! shapes, grouped into dotted namespaces, that the orchestrator selects
//! from and fans out over.
//!
//! # Architecture
//!
//! ```text
//! model documents (JSON) → loomgen-model (Model) → loomgen-codegen (orchestration)
//! ```
//!
//! The model types are designed to be:
//! - Target-agnostic (no knowledge of any output language)
//! - Read-only to the orchestration core (callers own the model)
//! - Self-contained (serde document form, no loader dependencies)

mod manifest;
mod model;
mod shape;
pub mod transform;

pub use manifest::{GenerationManifest, manifests_from_model, record_generated};
pub use model::Model;
pub use shape::{InvalidShapeId, MemberRef, Shape, ShapeId, ShapeKind};
