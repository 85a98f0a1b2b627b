//! Failing runs: exit status and untouched documents

use crate::common::*;

#[test]
fn test_missing_version_fails_without_touching_document() {
    let document = descriptor(DEFAULT_ID, "1.0.0");
    let project = Project::new(r#"{ "name": "no-version" }"#, &document);

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert_eq!(project.read("plugin.xml"), document);
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("FATAL"));
}

#[test]
fn test_malformed_manifest_fails() {
    let document = descriptor(DEFAULT_ID, "1.0.0");
    let project = Project::new("{ \"version\": ", &document);

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert_eq!(project.read("plugin.xml"), document);
    assert!(stderr_of(&output).contains("not valid JSON"));
}

#[test]
fn test_missing_manifest_fails() {
    let project = Project::new("{}", &descriptor(DEFAULT_ID, "1.0.0"));
    std::fs::remove_file(project.file("package.json")).unwrap();

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("package.json"));
}

#[test]
fn test_missing_document_fails_after_echo() {
    let project = Project::new(r#"{ "version": "3.0.0" }"#, "");
    std::fs::remove_file(project.file("plugin.xml")).unwrap();

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "3.0.0\n");
    assert!(stderr_of(&output).contains("plugin.xml"));
    assert!(!project.file("plugin.xml").exists());
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let project = Project::new(r#"{ "version": "3.0.0" }"#, &descriptor(DEFAULT_ID, "1.0.0"));

    let output = project.run(&["--dry-run"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(project.read("plugin.xml"), descriptor(DEFAULT_ID, "1.0.0"));
}

#[test]
fn test_failure_reaches_stderr_when_logging_to_file() {
    let document = descriptor(DEFAULT_ID, "1.0.0");
    let project = Project::new(r#"{ "name": "x" }"#, &document);
    let log_path = project.file("sync.log");

    let output = project.run(&["--log-file", log_path.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("FATAL"), "stderr: {}", stderr);
    assert!(stderr.contains("package.json"), "stderr: {}", stderr);
    assert_eq!(project.read("plugin.xml"), document);
}

#[test]
fn test_missing_version_names_manifest() {
    let project = Project::new("{}", &descriptor(DEFAULT_ID, "1.0.0"));

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("has no \"version\" field"));
}
