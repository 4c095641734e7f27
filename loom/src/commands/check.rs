use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use loomgen_codegen::{CodegenArgs, LoadModel, resolve, scan_manifests};

use crate::{
    config::Config,
    loader::DocumentLoader,
    reports::{CheckReport, Report, TerminalOutput},
};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to loom.toml (defaults to ./loom.toml)
    #[arg(short, long, default_value = "loom.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let args = Config::open(&self.config).unwrap_or_exit().into_args();
        let report = check(&args, &DocumentLoader)?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}

/// Load the model, scan its generation manifests, and resolve the eligible
/// namespace set. Duplicate manifest claims are collected into the report
/// rather than aborting, so the rest of the model can still be inspected.
fn check(args: &CodegenArgs, loader: &dyn LoadModel) -> Result<CheckReport> {
    let model = loader.load(args)?;

    let mut report = CheckReport {
        shape_count: model.shapes.len(),
        namespaces: model.namespaces().into_iter().collect(),
        already_generated: Vec::new(),
        eligible: Vec::new(),
        dependencies: args.dependencies.clone(),
        errors: Vec::new(),
    };

    match scan_manifests(&model) {
        Ok(already_generated) => {
            report.eligible = resolve(
                &model,
                args.allowed_namespaces.as_ref(),
                args.excluded_namespaces.as_ref(),
                &already_generated,
            )
            .into_iter()
            .collect();
            report.already_generated = already_generated.into_iter().collect();
        }
        Err(err) => report.errors.push(err.to_string()),
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_reports_duplicate_claims_without_aborting() {
        let temp = TempDir::new().unwrap();
        let spec = temp.path().join("model.json");
        fs::write(
            &spec,
            r#"{
                "shapes": { "x#Shape": { "type": "structure" } },
                "metadata": { "generated": { "dep-1": ["z"], "dep-2": ["z"] } }
            }"#,
        )
        .unwrap();

        let args = CodegenArgs {
            specs: vec![spec],
            ..CodegenArgs::default()
        };
        let report = check(&args, &DocumentLoader).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.shape_count, 1);
        assert!(report.eligible.is_empty());
    }

    #[test]
    fn test_check_resolves_eligibility() {
        let temp = TempDir::new().unwrap();
        let spec = temp.path().join("model.json");
        fs::write(
            &spec,
            r#"{
                "shapes": {
                    "a.b#City": { "type": "structure" },
                    "smithy.api#String": { "type": "string" }
                },
                "metadata": { "generated": { "dep-1": ["c.d"] } }
            }"#,
        )
        .unwrap();

        let args = CodegenArgs {
            specs: vec![spec],
            ..CodegenArgs::default()
        };
        let report = check(&args, &DocumentLoader).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.eligible, vec!["a.b"]);
        assert_eq!(report.already_generated, vec!["c.d"]);
    }
}
