use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use loomgen_codegen::{CodegenArgs, dump_model};

use crate::{config::Config, loader::DocumentLoader};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct DumpCommand {
    /// Model documents to load (overrides the specs from loom.toml)
    pub specs: Vec<PathBuf>,

    /// Path to loom.toml (defaults to ./loom.toml)
    #[arg(short, long, default_value = "loom.toml")]
    pub config: PathBuf,
}

impl DumpCommand {
    /// Run the dump command
    pub fn run(&self) -> Result<()> {
        let args = if self.specs.is_empty() {
            Config::open(&self.config).unwrap_or_exit().into_args()
        } else {
            CodegenArgs {
                specs: self.specs.clone(),
                ..CodegenArgs::default()
            }
        };

        println!("{}", dump_model(&args, &DocumentLoader)?);
        Ok(())
    }
}
