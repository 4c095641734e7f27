//! Idempotent filesystem commit of a generation result.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    entry::{CodegenEntry, CodegenResult},
    error::{Error, Result},
};

/// Write every entry of the result to its destination, sources first.
///
/// Existing files are overwritten and intermediate directories created as
/// needed, so committing the same result twice yields identical contents.
/// Returns the set of all destination paths written, for reverse-mapping
/// which files belong to this run (e.g. build-tool output tracking or later
/// pruning of stale artifacts).
///
/// The first failing write aborts the whole commit; callers must treat a
/// commit as all-or-nothing for a given invocation.
pub fn write(result: &CodegenResult) -> Result<BTreeSet<PathBuf>> {
    let mut written = BTreeSet::new();

    for entry in result.entries() {
        write_entry(entry)?;
        written.insert(entry.destination().to_path_buf());
    }

    Ok(written)
}

fn write_entry(entry: &CodegenEntry) -> Result<()> {
    let destination = entry.destination();
    create_parent_dirs(destination)?;

    match entry {
        CodegenEntry::FromMemory { content, .. } => {
            fs::write(destination, content).map_err(|source| Error::Commit {
                path: destination.to_path_buf(),
                source,
            })?;
        }
        CodegenEntry::FromDisk { source, .. } => {
            fs::copy(source, destination).map_err(|io| Error::Commit {
                path: destination.to_path_buf(),
                source: io,
            })?;
        }
    }
    Ok(())
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Commit {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
