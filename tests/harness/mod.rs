//! Test harness utilities for groundwork integration tests.
//!
//! Provides a disposable generated-project directory and helper commands.

use std::fs;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// A fake freshly generated project in a temp directory.
///
/// Carries both frontend skeleton directories and a context file, the way
/// the templating mechanism leaves them before provisioning runs.
pub struct TestProject {
    /// Temporary project directory
    pub dir: TempDir,
}

impl TestProject {
    /// Create a project with both frontend skeletons and a context file.
    pub fn new(slug: &str, frontend: &str) -> Self {
        let project = Self::bare();
        project.write_context(&format!(
            r#"{{"project_slug": "{}", "frontend": "{}"}}"#,
            slug, frontend
        ));
        project
    }

    /// Create a project directory with skeletons but no context file.
    pub fn bare() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        fs::create_dir_all(dir.path().join("frontend-next/src"))
            .expect("failed to create next skeleton");
        fs::write(dir.path().join("frontend-next/src/page.tsx"), "export {}\n")
            .expect("failed to seed next skeleton");
        fs::create_dir_all(dir.path().join("frontend-nuxt/src"))
            .expect("failed to create nuxt skeleton");
        fs::write(dir.path().join("frontend-nuxt/src/app.vue"), "<template/>\n")
            .expect("failed to seed nuxt skeleton");

        Self { dir }
    }

    /// Write (or overwrite) the context file with raw JSON.
    pub fn write_context(&self, json: &str) {
        fs::write(self.dir.path().join("scaffold.json"), json)
            .expect("failed to write context file");
    }

    /// Create a groundwork command rooted at the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("groundwork").expect("failed to find groundwork binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `groundwork provision .`.
    pub fn provision(&self) -> Output {
        self.cmd()
            .args(["provision", "."])
            .output()
            .expect("failed to run groundwork provision")
    }

    /// Path under the project directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Contents of a file under the project directory.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("failed to read project file")
    }
}

/// Assert the command succeeded, with stderr in the failure message.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed:\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Assert the command failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded:\nstdout: {}",
        stdout(output)
    );
}

/// Decode stdout as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Decode stderr as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
