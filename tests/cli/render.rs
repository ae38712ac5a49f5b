//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin() {
    cargo_bin_cmd!("deflist")
        .arg("render")
        .write_stdin("Term\n: text\n")
        .assert()
        .success()
        .stdout("<dl>\n<dt>Term</dt>\n<dd>text</dd>\n</dl>\n");
}

#[test]
fn test_render_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("glossary.md");
    fs::write(&test_file, "# Glossary\n\nApple\n\n:   A red fruit.\n").unwrap();

    cargo_bin_cmd!("deflist")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Glossary</h1>"))
        .stdout(predicate::str::contains("<dd>\n<p>A red fruit.</p>\n</dd>"));
}

#[test]
fn test_render_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("glossary.md");
    let output_file = temp_dir.path().join("glossary.html");
    fs::write(&test_file, "Term\n: text\n").unwrap();

    cargo_bin_cmd!("deflist")
        .args([
            "render",
            test_file.to_str().unwrap(),
            "--output",
            output_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output_file).unwrap();
    assert_eq!(html, "<dl>\n<dt>Term</dt>\n<dd>text</dd>\n</dl>\n");
}

#[test]
fn test_render_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "Term\n: text\n").unwrap();
    fs::write(
        temp_dir.path().join(".deflist.toml"),
        "[extensions]\ndefinition_lists = false\n",
    )
    .unwrap();

    cargo_bin_cmd!("deflist")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<p>Term\n: text</p>\n");
}

#[test]
fn test_render_with_crlf_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "line_ending = \"crlf\"\n").unwrap();

    cargo_bin_cmd!("deflist")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("text\n")
        .assert()
        .success()
        .stdout("<p>text</p>\r\n");
}
