//! Top-level entry points: generate and dump.

use eyre::Result;

use crate::{
    args::CodegenArgs,
    entry::{CodegenResult, unify},
    fanout::fan_out,
    ledger::scan_manifests,
    resolver::resolve,
    toolchain::{LoadModel, Toolchain},
};

/// Run one generation invocation: load the model, scan the generation
/// ledger, resolve eligible namespaces, fan out over the configured
/// pipelines, and unify their outputs.
///
/// The ledger scan is a global precondition: a duplicate manifest claim
/// fails the run before any rendering starts. Collaborator failures
/// propagate unmodified.
///
/// The returned result has not touched the filesystem; pass it to
/// [`crate::commit::write`] to commit it.
pub fn generate(args: &CodegenArgs, tools: &Toolchain) -> Result<CodegenResult> {
    let model = tools.loader.load(args)?;

    let already_generated = scan_manifests(&model)?;
    let eligible = resolve(
        &model,
        args.allowed_namespaces.as_ref(),
        args.excluded_namespaces.as_ref(),
        &already_generated,
    );

    let (sources, resources) = fan_out(&model, &eligible, args, tools)?;
    Ok(unify(sources, resources))
}

/// Load a model without manifest-based namespace discovery, flatten its
/// structural aliasing constructs, and serialize it to pretty-printed JSON.
pub fn dump_model(args: &CodegenArgs, loader: &dyn LoadModel) -> Result<String> {
    let mut model = loader.load_bare(args)?;
    model.flatten_aliases();
    Ok(model.to_json_pretty()?)
}
