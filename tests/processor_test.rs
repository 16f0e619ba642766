use std::fs;
use std::path::Path;

use plater::constants::IGNORABLE_ROOT_ITEMS;
use plater::error::Error;
use plater::fragments::{select, FeatureFlags, Fragment, InclusionPlan};
use plater::processor::Materializer;
use plater::tokens::TokenTable;
use tempfile::TempDir;

fn materialize(
    template: &Path,
    output: &Path,
    tokens: &TokenTable,
    plan: &InclusionPlan,
) -> plater::error::Result<()> {
    Materializer::new(template, output, tokens, plan, &IGNORABLE_ROOT_ITEMS).materialize()
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_names_and_contents_are_substituted() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let project_dir = template.path().join("{PROJECT}");
    fs::create_dir(&project_dir).unwrap();
    fs::write(project_dir.join("{PROJECT}Tests.swift"), "import {PROJECT}").unwrap();

    let tokens = TokenTable::new().with("PROJECT", "Foo");
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    let result = output.path().join("Foo").join("FooTests.swift");
    assert_eq!(read(result), "import Foo");
}

#[test]
fn test_ignorable_root_item_is_preserved() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(template.path().join("README.md"), "# {PROJECT}").unwrap();
    fs::write(output.path().join("README.md"), "my own notes").unwrap();

    let tokens = TokenTable::new().with("PROJECT", "Foo");
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    assert_eq!(read(output.path().join("README.md")), "my own notes");
}

#[test]
fn test_ignorable_name_is_written_when_destination_lacks_it() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(template.path().join("README.md"), "# {PROJECT}").unwrap();

    let tokens = TokenTable::new().with("PROJECT", "Foo");
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    assert_eq!(read(output.path().join("README.md")), "# Foo");
}

#[test]
fn test_ignorable_applies_only_at_root_level() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let docs = template.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("README.md"), "nested readme").unwrap();
    fs::create_dir(output.path().join("docs")).unwrap();
    fs::write(output.path().join("docs").join("README.md"), "stale").unwrap();

    let tokens = TokenTable::new();
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    assert_eq!(read(output.path().join("docs").join("README.md")), "nested readme");
}

#[test]
fn test_selected_fragment_is_placed_with_substitution() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let optional = template.path().join("Optional");
    fs::create_dir(&optional).unwrap();
    fs::write(optional.join("Config-a"), "configured for {PROJECT}").unwrap();
    fs::write(optional.join("Config-b"), "never written").unwrap();

    let fragments = vec![
        Fragment::new("Config-a", "Config", &["a"]),
        Fragment::new("Config-b", "Config", &["b"]),
    ];
    let flags: FeatureFlags = ["a", "b"].into_iter().collect();
    let plan = select(&flags, &fragments);

    let tokens = TokenTable::new().with("PROJECT", "Foo");
    materialize(template.path(), output.path(), &tokens, &plan).unwrap();

    assert_eq!(read(output.path().join("Config")), "configured for Foo");
}

#[test]
fn test_fragments_in_lowercase_optional_subtree_are_placed() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    // The reserved name is matched case-insensitively on both sides
    let optional = template.path().join("optional");
    fs::create_dir(&optional).unwrap();
    fs::write(optional.join("Podfile"), "pod '{PROJECT}'").unwrap();

    let fragments = vec![Fragment::new("Podfile", "Podfile", &["cocoapods"])];
    let flags: FeatureFlags = ["cocoapods"].into_iter().collect();
    let plan = select(&flags, &fragments);

    let tokens = TokenTable::new().with("PROJECT", "Foo");
    materialize(template.path(), output.path(), &tokens, &plan).unwrap();

    assert_eq!(read(output.path().join("Podfile")), "pod 'Foo'");
    assert!(!output.path().join("optional").exists());
}

#[test]
fn test_optional_subtree_is_not_copied_wholesale() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let optional = template.path().join("optional");
    fs::create_dir(&optional).unwrap();
    fs::write(optional.join("Fragment"), "unplanned").unwrap();

    let tokens = TokenTable::new();
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn test_hidden_entries_produce_empty_destination() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(template.path().join(".gitignore"), "target/").unwrap();
    fs::create_dir(template.path().join(".git")).unwrap();

    let tokens = TokenTable::new();
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn test_binary_files_are_copied_untouched() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    // Invalid UTF-8, with marker-looking bytes embedded
    let payload = [0xff, 0xfe, b'{', b'P', b'R', b'O', b'J', b'E', b'C', b'T', b'}', 0x00];
    fs::write(template.path().join("icon.bin"), payload).unwrap();

    let tokens = TokenTable::new().with("PROJECT", "Foo");
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    assert_eq!(fs::read(output.path().join("icon.bin")).unwrap(), payload);
}

#[test]
fn test_existing_destination_files_are_overwritten() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(template.path().join("Package.swift"), "name: {PROJECT}").unwrap();
    fs::write(output.path().join("Package.swift"), "old contents").unwrap();

    let tokens = TokenTable::new().with("PROJECT", "Foo");
    materialize(template.path(), output.path(), &tokens, &InclusionPlan::new()).unwrap();

    assert_eq!(read(output.path().join("Package.swift")), "name: Foo");
}

#[test]
fn test_missing_template_root_fails() {
    let output = TempDir::new().unwrap();
    let tokens = TokenTable::new();

    let result = materialize(
        Path::new("/no/such/template"),
        output.path(),
        &tokens,
        &InclusionPlan::new(),
    );
    assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
}

#[test]
fn test_missing_fragment_source_fails_with_path() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let mut plan = InclusionPlan::new();
    plan.insert("Config".to_string(), "Config-a".to_string());

    let tokens = TokenTable::new();
    match materialize(template.path(), output.path(), &tokens, &plan) {
        Err(Error::SourceUnreadable { path, .. }) => {
            assert!(path.ends_with("Optional/Config-a"));
        }
        other => panic!("Expected SourceUnreadable, got {:?}", other.err()),
    }
}
