use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_apidecl")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn json_lines(text: &str) -> Vec<serde_json::Value> {
    text.lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

// -- directory mode --

#[test]
fn directory_mode_emits_elements_in_file_order() {
    let assert = cmd()
        .args(["-f", "elements"])
        .arg(fixtures_dir())
        .assert()
        .success();
    let records = json_lines(&stdout_of(assert));
    let names: Vec<_> = records
        .iter()
        .map(|r| r["full_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "Announcer",
            "Announcer.post",
            "Chart",
            "Chart.marks",
            "Chart.init",
            "Chart.redraw",
            "MarkStyle",
            "MarkStyle.standard",
        ]
    );
}

#[test]
fn directory_mode_carries_docs_and_versions() {
    let assert = cmd()
        .args(["-f", "elements"])
        .arg(fixture_path("Charts.swift"))
        .assert()
        .success();
    let records = json_lines(&stdout_of(assert));

    let chart = &records[0];
    assert_eq!(chart["kind"], "struct");
    assert_eq!(chart["doc"], "A chart that plots marks.\n\nUse a chart to visualize data.");
    assert_eq!(chart["parent_type"], serde_json::Value::Null);

    let redraw = &records[3];
    assert_eq!(redraw["name"], "redraw");
    assert_eq!(redraw["introduced"]["minor"], 2);
    assert_eq!(
        redraw["signature"],
        "@available(iOS 17.2, *)\npublic func redraw() -> Bool"
    );
}

#[test]
fn pairs_format_is_default() {
    let assert = cmd().arg(fixtures_dir()).assert().success();
    let rows = json_lines(&stdout_of(assert));
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[0]["instruction"], "Explain the actor Announcer for iOS 17.0+.");
    assert!(rows.iter().all(|r| r["input"] == ""));
    assert!(rows[0]["output"]
        .as_str()
        .unwrap()
        .ends_with("Availability: iOS 17.0+\nSource: Accessibility.swift"));
}

#[test]
fn min_version_flag_raises_threshold() {
    let assert = cmd()
        .args(["-f", "elements", "--min-version", "18"])
        .arg(fixtures_dir())
        .assert()
        .success();
    let records = json_lines(&stdout_of(assert));
    let names: Vec<_> = records.iter().map(|r| r["full_name"].clone()).collect();
    assert_eq!(names, ["MarkStyle", "MarkStyle.standard"]);
}

#[test]
fn runs_are_reproducible() {
    let first = stdout_of(cmd().arg(fixtures_dir()).assert().success());
    let second = stdout_of(cmd().arg(fixtures_dir()).assert().success());
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn unreadable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::copy(
        fixture_path("Accessibility.swift"),
        dir.path().join("Accessibility.swift"),
    )
    .unwrap();
    std::fs::write(dir.path().join("Broken.swift"), b"\xc3\x28\xff").unwrap();

    let assert = cmd()
        .args(["-f", "elements"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping unreadable file"));
    assert_eq!(json_lines(&stdout_of(assert)).len(), 2);
}

#[test]
fn unmatched_pattern_yields_empty_output() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg(dir.path().join("*.swift"))
        .assert()
        .success()
        .stdout("");
}

// -- stdin mode --

#[test]
fn stdin_mode_single_struct() {
    let input = "/// Does X.\n@available(iOS 17.0, *)\npublic struct Foo {\n}\n";
    let assert = cmd()
        .args(["-f", "elements"])
        .write_stdin(input)
        .assert()
        .success();
    let records = json_lines(&stdout_of(assert));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Foo");
    assert_eq!(records[0]["doc"], "Does X.");
    assert_eq!(records[0]["source_file"], "<stdin>");
}

#[test]
fn stdin_mode_below_threshold_is_empty() {
    cmd()
        .write_stdin("/// Does X.\n@available(iOS 16.0, *)\npublic struct Foo {\n}\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn markdown_format() {
    cmd()
        .args(["-f", "markdown"])
        .write_stdin("@available(iOS 17.0, *)\npublic enum Mode {\n}\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Mode\n\n*enum*\n"));
}

// -- output file --

#[test]
fn output_file_is_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("data").join("api.jsonl");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .arg(fixture_path("Accessibility.swift"))
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 4);
}

// -- argument errors --

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "yaml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn malformed_min_version_fails() {
    cmd()
        .args(["--min-version", "seventeen"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid version"));
}

#[test]
fn empty_platform_fails() {
    cmd()
        .args(["--platform", ""])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("platform keyword is empty"));
}
