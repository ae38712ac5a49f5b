//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("deflist")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document"))
        .stdout(predicate::str::contains("Heading level=1"))
        .stdout(predicate::str::contains("Paragraph"));
}

#[test]
fn test_parse_definition_list_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "Term\n\n:   text\n").unwrap();

    cargo_bin_cmd!("deflist")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("DefinitionList offset=4"))
        .stdout(predicate::str::contains("DefinitionTerm"))
        .stdout(predicate::str::contains("DefinitionDescription loose"));
}

#[test]
fn test_parse_with_config_disabling_definition_lists() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&test_file, "Term\n: text\n").unwrap();
    fs::write(&config_file, "[extensions]\ndefinition_lists = false\n").unwrap();

    cargo_bin_cmd!("deflist")
        .args([
            "parse",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DefinitionList").not());
}

#[test]
fn test_parse_handles_edge_cases() {
    // Parser should not panic on malformed or unusual syntax
    for input in [":", ": \n:\n", "\t:\t\n", "a\n:\t\t\t\t\tb\n", "a\n: b\n\n\n\n: c\n"] {
        cargo_bin_cmd!("deflist")
            .arg("parse")
            .write_stdin(input)
            .assert()
            .success();
    }
}
