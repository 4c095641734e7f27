//! Project configuration: `loom.toml`.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use loomgen_codegen::{CodegenArgs, SkipSet};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a loom.toml describing your model documents and output directories"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse loom.toml")]
    #[diagnostic(code(loom::config_parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Root schema for loom.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Generation settings.
    #[serde(default)]
    pub codegen: CodegenSection,
}

/// The `[codegen]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CodegenSection {
    /// Model documents to load.
    #[serde(default)]
    pub specs: Vec<PathBuf>,

    /// Destination directory for generated sources (defaults to "generated").
    pub output: Option<PathBuf>,

    /// Destination directory for generated resources (defaults to
    /// `<output>/resources`).
    pub resource_output: Option<PathBuf>,

    /// Only generate these namespaces.
    pub allow: Option<Vec<String>>,

    /// Never generate these namespaces.
    pub exclude: Option<Vec<String>>,

    /// Pipelines to disable.
    #[serde(default)]
    pub skip: Vec<SkipFlag>,

    /// Model transformers to apply after loading.
    #[serde(default)]
    pub transformers: Vec<String>,

    /// Dependency coordinates resolved by the loader.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Repositories for dependency resolution.
    #[serde(default)]
    pub repositories: Vec<String>,

    /// Discover model documents inside local archives.
    #[serde(default)]
    pub discover_models: bool,

    /// Local archive directories contributing models and generation records.
    #[serde(default)]
    pub local_archives: Vec<PathBuf>,
}

/// A pipeline that can be disabled from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipFlag {
    Sources,
    Resources,
    ApiDescriptions,
    BinarySchemas,
}

impl Config {
    /// Open and parse a loom.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a loom.toml from a string with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            let span = e.span().map(SourceSpan::from);
            Box::new(Error::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source: e,
            })
        })
    }

    /// Lower the configuration to the library's invocation record.
    pub fn into_args(self) -> CodegenArgs {
        let codegen = self.codegen;

        let output_dir = codegen.output.unwrap_or_else(|| PathBuf::from("generated"));
        let resource_output_dir = codegen
            .resource_output
            .unwrap_or_else(|| output_dir.join("resources"));

        let mut skip = SkipSet::default();
        for flag in &codegen.skip {
            match flag {
                SkipFlag::Sources => skip.sources = true,
                SkipFlag::Resources => skip.resources = true,
                SkipFlag::ApiDescriptions => skip.api_descriptions = true,
                SkipFlag::BinarySchemas => skip.binary_schemas = true,
            }
        }

        CodegenArgs {
            specs: codegen.specs,
            dependencies: codegen.dependencies,
            repositories: codegen.repositories,
            transformers: codegen.transformers,
            allowed_namespaces: codegen.allow.map(to_set),
            excluded_namespaces: codegen.exclude.map(to_set),
            skip,
            output_dir,
            resource_output_dir,
            discover_models: codegen.discover_models,
            local_archives: codegen.local_archives,
        }
    }
}

fn to_set(namespaces: Vec<String>) -> BTreeSet<String> {
    namespaces.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Config {
        Config::from_str_with_filename(content, "loom.toml").expect("Failed to parse test config")
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let args = parse("").into_args();

        assert!(args.specs.is_empty());
        assert_eq!(args.output_dir, PathBuf::from("generated"));
        assert_eq!(args.resource_output_dir, PathBuf::from("generated/resources"));
        assert_eq!(args.skip, SkipSet::default());
    }

    #[test]
    fn test_full_config() {
        let args = parse(
            r#"
            [codegen]
            specs = ["model/main.json"]
            output = "build/src"
            resource-output = "build/resources"
            allow = ["a.b"]
            exclude = ["a.b.internal"]
            skip = ["api-descriptions", "binary-schemas"]
            transformers = ["flatten-aliases"]
            dependencies = ["org.example:weather-model:1.2.0"]
            discover-models = true
            local-archives = ["deps/weather"]
        "#,
        )
        .into_args();

        assert_eq!(args.specs, vec![PathBuf::from("model/main.json")]);
        assert_eq!(args.output_dir, PathBuf::from("build/src"));
        assert!(args.allowed_namespaces.unwrap().contains("a.b"));
        assert!(args.excluded_namespaces.unwrap().contains("a.b.internal"));
        assert!(args.skip.api_descriptions);
        assert!(args.skip.binary_schemas);
        assert!(!args.skip.sources);
        assert!(args.discover_models);
        assert_eq!(args.local_archives, vec![PathBuf::from("deps/weather")]);
    }

    #[test]
    fn test_parse_error_carries_span() {
        let err = Config::from_str_with_filename("[codegen\n", "loom.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
