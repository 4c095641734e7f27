//! Model loading from local documents and archive directories.
//!
//! This loader covers the local half of the load contract: explicit model
//! documents, plus model documents and generation records discovered in
//! local archive directories. Remote dependency coordinates are left to
//! richer loaders; the ones listed in the args are carried through for them.

use std::{fs, path::Path};

use eyre::{Context, Result};
use loomgen_codegen::{CodegenArgs, LoadModel, fanout::RECORD_NAMESPACES_PATH};
use loomgen_model::{Model, record_generated, transform};

/// Loads models from JSON documents on the local filesystem.
pub struct DocumentLoader;

impl LoadModel for DocumentLoader {
    fn load(&self, args: &CodegenArgs) -> Result<Model> {
        self.load_inner(args, true)
    }

    fn load_bare(&self, args: &CodegenArgs) -> Result<Model> {
        self.load_inner(args, false)
    }
}

impl DocumentLoader {
    fn load_inner(&self, args: &CodegenArgs, discover_manifests: bool) -> Result<Model> {
        let mut model = Model::new();

        for spec in &args.specs {
            merge_document(&mut model, spec)?;
        }

        for archive in &args.local_archives {
            if args.discover_models {
                merge_archive_documents(&mut model, archive)?;
            }
            if discover_manifests {
                ingest_namespace_record(&mut model, archive)?;
            }
        }

        transform::apply(&mut model, &args.transformers)?;
        Ok(model)
    }
}

fn merge_document(model: &mut Model, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read model document '{}'", path.display()))?;
    let document = Model::from_json(&text)
        .wrap_err_with(|| format!("failed to parse model document '{}'", path.display()))?;
    model.merge(document);
    Ok(())
}

/// Merge every JSON model document found at an archive's top level,
/// in file-name order.
fn merge_archive_documents(model: &mut Model, archive: &Path) -> Result<()> {
    let entries = fs::read_dir(archive)
        .wrap_err_with(|| format!("failed to read archive '{}'", archive.display()))?;

    let mut documents: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    documents.sort();

    for document in documents {
        merge_document(model, &document)?;
    }
    Ok(())
}

/// Fold an archive's generation record, if present, into the model's
/// metadata for the generation ledger.
fn ingest_namespace_record(model: &mut Model, archive: &Path) -> Result<()> {
    let record = archive.join(RECORD_NAMESPACES_PATH);
    if !record.exists() {
        return Ok(());
    }

    let text = fs::read_to_string(&record)
        .wrap_err_with(|| format!("failed to read generation record '{}'", record.display()))?;
    let namespaces: Vec<String> = serde_json::from_str(&text)
        .wrap_err_with(|| format!("failed to parse generation record '{}'", record.display()))?;

    let artifact = archive
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| archive.display().to_string());
    record_generated(model, &artifact, namespaces);
    Ok(())
}
