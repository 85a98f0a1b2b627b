//! Common test utilities and helpers
//!
//! Fixture directories holding a manifest and a plugin descriptor, plus a
//! runner for the compiled binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const DEFAULT_ID: &str = "@canalcircle/cordova-plugin-firebasex-cc";

pub fn descriptor(plugin_id: &str, version: &str) -> String {
    format!(
        concat!(
            "<?xml version='1.0' encoding='UTF-8'?>\n",
            "<plugin id=\"{}\" version=\"{}\"\n",
            "    xmlns=\"http://apache.org/cordova/ns/plugins/1.0\">\n",
            "    <name>Firebase</name>\n",
            "    <engines><engine name=\"cordova\" version=\">=9\"/></engines>\n",
            "</plugin>\n"
        ),
        plugin_id, version
    )
}

/// A scratch project directory with `package.json` and `plugin.xml`
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new(manifest: &str, document: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("package.json"), manifest).expect("write manifest");
        fs::write(dir.path().join("plugin.xml"), document).expect("write document");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("read fixture file")
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.file(name), contents).expect("write fixture file");
    }

    /// Run the binary with the project as working directory
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_plugin-version-sync"))
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .output()
            .expect("run plugin-version-sync")
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
