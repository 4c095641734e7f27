//! End-to-end orchestration tests: load → ledger → resolve → fan-out →
//! unify → commit.

use std::{collections::BTreeSet, fs, path::PathBuf, sync::atomic::Ordering};

use loomgen_codegen::{
    CodegenArgs, CodegenEntry, Error, Toolchain, generate,
    testing::{CountingRender, StaticApi, StaticLoader, UnitRender, model_with_namespaces},
    toolchain::ApiDescription,
    write,
};
use loomgen_model::record_generated;
use tempfile::TempDir;

fn args_into(dir: &std::path::Path) -> CodegenArgs {
    CodegenArgs {
        specs: vec![PathBuf::from("model.json")],
        output_dir: dir.join("src"),
        resource_output_dir: dir.join("resources"),
        ..CodegenArgs::default()
    }
}

#[test]
fn open_mode_generates_only_user_namespaces() {
    // Scenario: system and vendor namespaces are never generated in open mode.
    let model = model_with_namespaces(&["a.b", "aws.foo", "smithy.bar"]);
    let temp = TempDir::new().unwrap();

    let tools = Toolchain::new(StaticLoader(model), UnitRender::new("rs"));
    let result = generate(&args_into(temp.path()), &tools).unwrap();

    assert_eq!(result.sources.len(), 1);
    assert_eq!(
        result.sources[0].destination(),
        temp.path().join("src/a/b/b.rs")
    );
}

#[test]
fn upstream_manifest_namespaces_are_skipped() {
    let mut model = model_with_namespaces(&["x", "y"]);
    record_generated(&mut model, "dep-1", ["y"]);
    let temp = TempDir::new().unwrap();

    let tools = Toolchain::new(StaticLoader(model), UnitRender::new("rs"));
    let result = generate(&args_into(temp.path()), &tools).unwrap();

    let paths: Vec<_> = result
        .sources
        .iter()
        .map(CodegenEntry::destination)
        .collect();
    assert_eq!(paths, vec![temp.path().join("src/x/x.rs")]);
}

#[test]
fn duplicate_manifest_claim_fails_before_rendering() {
    let mut model = model_with_namespaces(&["x", "z"]);
    record_generated(&mut model, "dep-1", ["z"]);
    record_generated(&mut model, "dep-2", ["z"]);
    let temp = TempDir::new().unwrap();

    let (spy, calls) = CountingRender::new(UnitRender::new("rs"));
    let tools = Toolchain::new(StaticLoader(model), spy);

    let err = generate(&args_into(temp.path()), &tools).unwrap_err();
    let err = err
        .downcast_ref::<Error>()
        .expect("typed orchestration error");
    assert!(matches!(err, Error::DuplicateManifestNamespace { .. }));

    // The renderer was never invoked.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_inputs_still_produce_placeholder_records() {
    // No specs and nothing eligible, sources enabled, resources enabled.
    let model = model_with_namespaces(&[]);
    let temp = TempDir::new().unwrap();
    let mut args = args_into(temp.path());
    args.specs.clear();

    let tools = Toolchain::new(StaticLoader(model), UnitRender::new("rs"));
    let result = generate(&args, &tools).unwrap();

    assert!(result.sources.is_empty());
    assert_eq!(result.resources.len(), 2);
}

#[test]
fn sources_disabled_with_api_enabled_yields_api_entries_only() {
    let model = model_with_namespaces(&["a.b"]);
    let temp = TempDir::new().unwrap();
    let mut args = args_into(temp.path());
    args.skip.sources = true;

    let tools = Toolchain::new(StaticLoader(model), UnitRender::new("rs")).with_api(StaticApi(
        vec![ApiDescription {
            namespace: "a.b".into(),
            service: "Weather".into(),
            body: "{\"openapi\":\"3.0.0\"}".into(),
        }],
    ));
    let result = generate(&args, &tools).unwrap();

    assert!(result.sources.is_empty());
    let paths: Vec<_> = result
        .resources
        .iter()
        .map(CodegenEntry::destination)
        .collect();
    assert_eq!(paths, vec![temp.path().join("resources/a.b.Weather.json")]);
}

#[test]
fn generate_then_write_commits_every_entry() {
    let model = model_with_namespaces(&["com.example"]);
    let temp = TempDir::new().unwrap();
    let args = args_into(temp.path());

    let tools = Toolchain::new(StaticLoader(model), UnitRender::new("rs"));
    let result = generate(&args, &tools).unwrap();
    let written = write(&result).unwrap();

    let expected: BTreeSet<_> = [
        temp.path().join("src/com/example/example.rs"),
        temp.path().join("resources/META-INF/loom/manifest"),
        temp.path().join("resources/META-INF/loom/namespaces.json"),
    ]
    .into_iter()
    .collect();
    assert_eq!(written, expected);

    for path in &written {
        assert!(path.exists(), "missing {}", path.display());
    }

    let listing =
        fs::read_to_string(temp.path().join("resources/META-INF/loom/namespaces.json")).unwrap();
    let namespaces: Vec<String> = serde_json::from_str(&listing).unwrap();
    assert_eq!(namespaces, vec!["com.example"]);
}

#[test]
fn writing_twice_yields_identical_contents() {
    let model = model_with_namespaces(&["a"]);
    let temp = TempDir::new().unwrap();
    let args = args_into(temp.path());

    let tools = Toolchain::new(StaticLoader(model), UnitRender::new("rs"));
    let result = generate(&args, &tools).unwrap();

    write(&result).unwrap();
    let first = fs::read_to_string(temp.path().join("src/a/a.rs")).unwrap();
    write(&result).unwrap();
    let second = fs::read_to_string(temp.path().join("src/a/a.rs")).unwrap();

    assert_eq!(first, second);
}
