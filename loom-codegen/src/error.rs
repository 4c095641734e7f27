use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for orchestration operations with typed failures.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("namespace '{namespace}' is claimed by more than one generation manifest")]
    #[diagnostic(
        code(loom::duplicate_manifest_namespace),
        help(
            "each namespace may be generated by exactly one upstream artifact; \
             '{namespace}' is claimed by {artifacts}. Remove the duplicate \
             generation from all but one of them."
        )
    )]
    DuplicateManifestNamespace {
        namespace: String,
        /// The claiming artifact coordinates, comma-separated.
        artifacts: String,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(loom::commit_failed))]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
