//! Pipeline fan-out: per-namespace source rendering plus the whole-model
//! side-format pipelines.

use std::{collections::BTreeSet, path::Path};

use eyre::Result;
use loomgen_model::Model;

use crate::{
    args::CodegenArgs,
    entry::CodegenEntry,
    toolchain::{RenderedUnit, Toolchain},
};

/// Index file naming the namespace record inside an artifact.
pub const RECORD_MANIFEST_PATH: &str = "META-INF/loom/manifest";

/// Record of the namespaces generated by one run, read back from dependency
/// artifacts by loaders and fed to the generation ledger.
pub const RECORD_NAMESPACES_PATH: &str = "META-INF/loom/namespaces.json";

const RECORD_FILE_NAME: &str = "namespaces.json";

/// Run the configured pipelines over the model and collect their entries.
///
/// Precondition: the generation ledger scan has already succeeded; fan-out
/// never re-validates manifests. The eligible set is iterated in its
/// lexicographic order and the side-format outputs are sorted before entry
/// creation, so two invocations over the same inputs emit identical entry
/// sequences.
///
/// Resource entries are concatenated in a fixed order: namespace records,
/// then API descriptions, then binary schemas.
pub fn fan_out(
    model: &Model,
    eligible: &BTreeSet<String>,
    args: &CodegenArgs,
    tools: &Toolchain,
) -> Result<(Vec<CodegenEntry>, Vec<CodegenEntry>)> {
    let mut sources = Vec::new();
    if !args.skip.sources {
        for namespace in eligible {
            for unit in tools.render.render(model, namespace)? {
                sources.push(source_entry(&args.output_dir, &unit, tools.render.extension()));
            }
        }
    }

    let generated: BTreeSet<String> = if args.skip.sources {
        BTreeSet::new()
    } else {
        eligible.clone()
    };

    let mut resources = Vec::new();
    if emit_namespace_record(args, eligible) {
        resources.extend(namespace_record(&args.resource_output_dir, &generated)?);
    }

    if !args.skip.api_descriptions
        && let Some(api) = &tools.api
    {
        let mut descriptions = api.convert(model, args.allowed_namespaces.as_ref())?;
        descriptions.sort_by(|a, b| {
            (a.namespace.as_str(), a.service.as_str())
                .cmp(&(b.namespace.as_str(), b.service.as_str()))
        });
        for description in descriptions {
            let path = args
                .resource_output_dir
                .join(format!("{}.{}.json", description.namespace, description.service));
            resources.push(CodegenEntry::from_memory(path, description.body));
        }
    }

    if !args.skip.binary_schemas
        && let Some(compiler) = &tools.schema
    {
        let mut compiled = compiler.compile(model)?;
        compiled.sort_by(|a, b| a.path.cmp(&b.path));
        for schema in compiled {
            let path = args.resource_output_dir.join(&schema.path);
            resources.push(CodegenEntry::from_memory(path, schema.contents));
        }
    }

    Ok((sources, resources))
}

/// Destination for one rendered unit: namespace segments become directories,
/// the unit name plus the renderer's extension becomes the file name.
fn source_entry(output_dir: &Path, unit: &RenderedUnit, extension: &str) -> CodegenEntry {
    let mut path = output_dir.to_path_buf();
    for segment in unit.namespace.split('.') {
        path.push(segment);
    }
    path.push(format!("{}.{}", unit.name, extension));
    CodegenEntry::from_memory(path, unit.content.clone())
}

/// Whether this run emits the namespace-record side-artifact.
///
/// With sources enabled the record is always emitted (possibly listing
/// nothing). With sources disabled it has no meaning, except when resource
/// generation was requested with no specs and no eligible namespaces: the
/// two near-empty files are still produced so downstream tooling that
/// expects them to exist keeps a stable output shape.
fn emit_namespace_record(args: &CodegenArgs, eligible: &BTreeSet<String>) -> bool {
    if args.skip.resources {
        return false;
    }
    !args.skip.sources || (args.specs.is_empty() && eligible.is_empty())
}

/// The two namespace-record entries for this run.
fn namespace_record(
    resource_output_dir: &Path,
    generated: &BTreeSet<String>,
) -> Result<[CodegenEntry; 2]> {
    let index = format!("{RECORD_FILE_NAME}\n");

    let namespaces: Vec<&String> = generated.iter().collect();
    let mut listing = serde_json::to_string_pretty(&namespaces)?;
    listing.push('\n');

    Ok([
        CodegenEntry::from_memory(resource_output_dir.join(RECORD_MANIFEST_PATH), index),
        CodegenEntry::from_memory(resource_output_dir.join(RECORD_NAMESPACES_PATH), listing),
    ])
}
