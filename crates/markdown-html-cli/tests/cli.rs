use std::fs;

use assert_cmd::Command;
use markdown_html_test_support::{Workspace, SAMPLE_DOCUMENT, UNTERMINATED_FENCE};
use predicates::prelude::*;

const OUTPUT: &str = "GANJES_DAO_DESIGN_DOCUMENT.html";

fn command(workspace: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("markdown-html").expect("binary");
    cmd.current_dir(workspace.path());
    cmd
}

#[test]
fn converts_design_document_in_current_directory() {
    let workspace = Workspace::new();
    workspace.write_input(SAMPLE_DOCUMENT);

    command(&workspace)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ HTML conversion completed successfully!"))
        .stdout(predicate::str::contains("🌐 HTML saved as: GANJES_DAO_DESIGN_DOCUMENT.html"));

    let html = fs::read_to_string(workspace.path().join(OUTPUT)).expect("read output");
    assert!(html.contains("<table>"));
    assert!(html.contains(r#"<h2 id="overview">Overview</h2>"#));
    assert!(html.contains("🖨️ Print to PDF"));
}

#[test]
fn missing_input_prints_not_found_and_exits_cleanly() {
    let workspace = Workspace::new();

    command(&workspace)
        .assert()
        .success()
        .stdout("❌ Markdown file not found: GANJES_DAO_DESIGN_DOCUMENT.md\n")
        .stderr(predicate::str::is_empty());

    assert!(workspace.entries().is_empty());
}

#[test]
fn empty_input_still_produces_a_page() {
    let workspace = Workspace::new();
    workspace.write_input("");

    command(&workspace).assert().success();

    let html = fs::read_to_string(workspace.path().join(OUTPUT)).expect("read output");
    assert!(html.contains("class=\"document-header\""));
    assert!(html.contains("class=\"document-footer\""));
}

#[test]
fn malformed_markdown_does_not_crash() {
    let workspace = Workspace::new();
    workspace.write_input(UNTERMINATED_FENCE);

    command(&workspace)
        .assert()
        .success()
        .stdout(predicate::str::contains("completed successfully"));
}

#[test]
fn conversion_errors_are_reported_with_zero_exit() {
    let workspace = Workspace::new();
    workspace.write_input("# Title\n");
    fs::create_dir(workspace.path().join(OUTPUT)).expect("block output path");

    command(&workspace)
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Error during conversion:"));
}

#[test]
fn rejects_positional_arguments() {
    let workspace = Workspace::new();

    command(&workspace)
        .arg("README.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn verbose_flag_logs_to_stderr() {
    let workspace = Workspace::new();
    workspace.write_input("# Title\n");

    command(&workspace)
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote html document"));
}

#[test]
fn logging_ignores_environment() {
    let workspace = Workspace::new();
    workspace.write_input("# Title\n");

    command(&workspace)
        .env("RUST_LOG", "trace")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
