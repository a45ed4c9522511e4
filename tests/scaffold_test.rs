//! End-to-end scenario: the hello-world mobile template (two generated
//! files, three verbatim copies) materialized with fileName=MyApp.

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use stencil::error::{Error, Result};
use stencil::manifest::load_manifest;
use stencil::parser::{get_answers, parse_param_args};
use stencil::processor::{OverwritePolicy, Processor};
use stencil::prompt::Prompter;
use stencil::renderer::TokenRenderer;
use tempfile::TempDir;

struct StubPrompter;

impl Prompter for StubPrompter {
    fn confirm(&self, _skip: bool, _message: String) -> Result<bool> {
        Ok(true)
    }

    fn text(&self, message: String, default: Option<String>) -> Result<String> {
        default.ok_or_else(|| Error::PromptError(format!("no value for '{}'", message)))
    }
}

const APP_TEMPLATE: &str = "let page = tabris.create('Page', { title: '{{fileName}}' });\npage.open();\n";
const PACKAGE_TEMPLATE: &str = "{\n  \"name\": \"{{fileName}}\",\n  \"main\": \"{{fileName}}.js\"\n}\n";
const TABRIS_PACKAGE: &str = "{\"name\": \"tabris\", \"version\": \"1.9.0\"}\n";
const TABRIS_MIN: &str = "/* tabris.min.js */\n";
const BOOT_MIN: &str = "/* boot.min.js */\n";

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn build_template_dir(root: &Path) {
    write(
        &root.join("template.json"),
        r#"{
            "name": "Hello World Mobile",
            "description": "Hello World mobile application",
            "sources": [
                {"location": "/app.js.template", "action": "generate", "rename": "{{fileName}}.js"},
                {"location": "/package.json.template", "action": "generate", "rename": "package.json"},
                {"location": "/node_modules/tabris/package.json", "action": "copy", "rename": "/node_modules/tabris/package.json"},
                {"location": "/node_modules/tabris/tabris.min.js", "action": "copy", "rename": "/node_modules/tabris/tabris.min.js"},
                {"location": "/node_modules/tabris/boot.min.js", "action": "copy", "rename": "/node_modules/tabris/boot.min.js"}
            ],
            "parameters": [{"key": "fileName"}]
        }"#,
    );
    write(&root.join("app.js.template"), APP_TEMPLATE);
    write(&root.join("package.json.template"), PACKAGE_TEMPLATE);
    write(&root.join("node_modules/tabris/package.json"), TABRIS_PACKAGE);
    write(&root.join("node_modules/tabris/tabris.min.js"), TABRIS_MIN);
    write(&root.join("node_modules/tabris/boot.min.js"), BOOT_MIN);
}

fn build_expected_dir(root: &Path) {
    write(
        &root.join("MyApp.js"),
        "let page = tabris.create('Page', { title: 'MyApp' });\npage.open();\n",
    );
    write(
        &root.join("package.json"),
        "{\n  \"name\": \"MyApp\",\n  \"main\": \"MyApp.js\"\n}\n",
    );
    write(&root.join("node_modules/tabris/package.json"), TABRIS_PACKAGE);
    write(&root.join("node_modules/tabris/tabris.min.js"), TABRIS_MIN);
    write(&root.join("node_modules/tabris/boot.min.js"), BOOT_MIN);
}

#[test_log::test]
fn test_hello_world_scaffolding() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let expected_dir = TempDir::new().unwrap();
    build_template_dir(template_dir.path());
    build_expected_dir(expected_dir.path());

    let descriptor = load_manifest(template_dir.path()).unwrap();
    assert_eq!(descriptor.sources.len(), 5);

    let overrides = parse_param_args(&["fileName=MyApp".to_string()]).unwrap();
    let answers =
        get_answers(&StubPrompter, &descriptor.parameters, serde_json::Value::Null, overrides)
            .unwrap();

    let renderer = TokenRenderer::new();
    let processor = Processor::new(
        &renderer,
        &StubPrompter,
        template_dir.path(),
        output_dir.path(),
        OverwritePolicy::Overwrite,
        &answers,
    );

    let planned = processor.run(&descriptor).unwrap();

    // Targets come out in manifest order
    let targets: Vec<PathBuf> =
        planned.iter().map(|p| p.operation.target().to_path_buf()).collect();
    assert_eq!(
        targets,
        vec![
            output_dir.path().join("MyApp.js"),
            output_dir.path().join("package.json"),
            output_dir.path().join("node_modules/tabris/package.json"),
            output_dir.path().join("node_modules/tabris/tabris.min.js"),
            output_dir.path().join("node_modules/tabris/boot.min.js"),
        ]
    );

    assert!(!dir_diff::is_different(output_dir.path(), expected_dir.path()).unwrap());
}

#[test_log::test]
fn test_later_actions_overwrite_earlier_outputs() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    write(&template_dir.path().join("first.txt"), "first\n");
    write(&template_dir.path().join("second.txt"), "second\n");
    write(
        &template_dir.path().join("template.json"),
        r#"{
            "name": "t", "description": "d",
            "sources": [
                {"location": "first.txt", "action": "copy", "rename": "out.txt"},
                {"location": "second.txt", "action": "copy", "rename": "out.txt"}
            ]
        }"#,
    );

    let descriptor = load_manifest(template_dir.path()).unwrap();
    let renderer = TokenRenderer::new();
    let answers = IndexMap::new();
    let processor = Processor::new(
        &renderer,
        &StubPrompter,
        template_dir.path(),
        output_dir.path(),
        OverwritePolicy::Overwrite,
        &answers,
    );

    processor.run(&descriptor).unwrap();
    assert_eq!(
        fs::read_to_string(output_dir.path().join("out.txt")).unwrap(),
        "second\n"
    );
}
