//! Artifact entries and the unified result of one generation run.

use std::path::{Path, PathBuf};

/// One artifact destined for the filesystem.
///
/// Entries either carry their content in memory or point at an external
/// file to be copied. The destination path is the identity key consumers
/// use for deduplication; two pipelines targeting the same destination is
/// a caller configuration error, not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenEntry {
    /// Content fully materialized in memory.
    FromMemory {
        /// Destination path.
        path: PathBuf,
        /// File content.
        content: Vec<u8>,
    },
    /// A reference to an externally-owned file to be copied.
    FromDisk {
        /// Destination path.
        path: PathBuf,
        /// The file to copy from.
        source: PathBuf,
    },
}

impl CodegenEntry {
    /// Create an in-memory entry.
    pub fn from_memory(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self::FromMemory {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Create an entry copied from an existing file.
    pub fn from_disk(path: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self::FromDisk {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The destination path of this entry, whichever variant it is.
    pub fn destination(&self) -> &Path {
        match self {
            Self::FromMemory { path, .. } | Self::FromDisk { path, .. } => path,
        }
    }
}

/// The unified artifact set produced by one generation run.
///
/// Constructed once per run via [`unify`], immutable afterwards, and
/// consumed exactly once by [`crate::commit::write`].
#[derive(Debug, Clone, Default)]
pub struct CodegenResult {
    /// Generated source files, in namespace order.
    pub sources: Vec<CodegenEntry>,
    /// Generated resource files: namespace records, then API descriptions,
    /// then binary schemas.
    pub resources: Vec<CodegenEntry>,
}

impl CodegenResult {
    /// Total number of entries across both sequences.
    pub fn len(&self) -> usize {
        self.sources.len() + self.resources.len()
    }

    /// Whether the run produced no artifacts at all.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.resources.is_empty()
    }

    /// Iterate over all entries, sources first.
    pub fn entries(&self) -> impl Iterator<Item = &CodegenEntry> {
        self.sources.iter().chain(self.resources.iter())
    }
}

/// Merge the pipeline outputs into one result set.
///
/// Pure aggregation: the ordered sequences are wrapped as-is, without
/// deduplication. Callers are responsible for not configuring overlapping
/// pipelines that target the same destination path.
pub fn unify(sources: Vec<CodegenEntry>, resources: Vec<CodegenEntry>) -> CodegenResult {
    CodegenResult { sources, resources }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_is_shared_across_variants() {
        let memory = CodegenEntry::from_memory("out/a.rs", "fn main() {}");
        let disk = CodegenEntry::from_disk("out/b.rs", "/elsewhere/b.rs");

        assert_eq!(memory.destination(), Path::new("out/a.rs"));
        assert_eq!(disk.destination(), Path::new("out/b.rs"));
    }

    #[test]
    fn test_unify_preserves_order() {
        let sources = vec![
            CodegenEntry::from_memory("a", "1"),
            CodegenEntry::from_memory("b", "2"),
        ];
        let resources = vec![CodegenEntry::from_memory("c", "3")];

        let result = unify(sources, resources);

        let paths: Vec<_> = result.entries().map(CodegenEntry::destination).collect();
        assert_eq!(
            paths,
            vec![Path::new("a"), Path::new("b"), Path::new("c")]
        );
        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
    }
}
