//! Plugin variants selected through configuration files

use crate::common::*;

const WIDGET: &str = r#"<widget><plugin id="acme" version="2.9.9"/></widget>"#;

#[test]
fn test_default_config_file_is_discovered() {
    let project = Project::new(r#"{ "version": "3.0.0" }"#, WIDGET);
    project.write("plugin-version-sync.toml", "plugin-id = \"acme\"\n");

    let output = project.run(&[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("3.0.0"));
    assert_eq!(
        project.read("plugin.xml"),
        r#"<widget><plugin id="acme" version="3.0.0"/></widget>"#
    );
}

#[test]
fn test_explicit_config_selects_variant_files() {
    let project = Project::new(r#"{ "version": "9.9.9" }"#, WIDGET);
    std::fs::create_dir(project.file("cc")).unwrap();
    project.write("cc/package.json", r#"{ "version": "4.0.0" }"#);
    project.write("cc/plugin.xml", &descriptor("acme-cc", "3.0.0"));
    project.write(
        "cc.toml",
        "manifest = \"cc/package.json\"\ndocument = \"cc/plugin.xml\"\nplugin-id = \"acme-cc\"\n",
    );

    let output = project.run(&["--config-file", "cc.toml"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "4.0.0\n");
    assert_eq!(project.read("cc/plugin.xml"), descriptor("acme-cc", "4.0.0"));
    assert_eq!(project.read("plugin.xml"), WIDGET);
}

#[test]
fn test_missing_explicit_config_fails() {
    let project = Project::new(r#"{ "version": "3.0.0" }"#, WIDGET);

    let output = project.run(&["-c", "nope.toml"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("does not exist"));
    assert_eq!(project.read("plugin.xml"), WIDGET);
}

#[test]
fn test_invalid_config_fails_before_sync() {
    let project = Project::new(r#"{ "version": "3.0.0" }"#, WIDGET);
    project.write("plugin-version-sync.toml", "plugin-id = 7\n");

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("'plugin-id' must be a string"));
}
