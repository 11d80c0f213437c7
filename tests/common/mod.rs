//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory for test workspaces and provides
/// utilities for laying out project checkouts.
pub struct TestWorkspace {
    /// Temporary directory for the workspace
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new test workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a project checkout with the given manifest
    pub fn add_project(&self, name: &str, manifest: &str) {
        let dir = self.dir.path().join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create project directory");
        std::fs::write(dir.join("project.toml"), manifest).expect("Failed to write manifest");
    }

    /// Create a file inside the workspace
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the workspace
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose a project manifest with dependencies
pub fn manifest(
    group: &str,
    artifact: &str,
    version: &str,
    dependencies: &[(&str, &str, &str)],
) -> String {
    let mut content = format!(
        "[project]\ngroup = \"{group}\"\nartifact = \"{artifact}\"\nversion = \"{version}\"\n"
    );
    for (dep_group, dep_artifact, dep_version) in dependencies {
        content.push_str(&format!(
            "\n[[dependencies]]\ngroup = \"{dep_group}\"\nartifact = \"{dep_artifact}\"\nversion = \"{dep_version}\"\n"
        ));
    }
    content
}

/// Compose a project manifest with a parent reference
#[allow(dead_code)]
pub fn manifest_with_parent(
    group: &str,
    artifact: &str,
    version: &str,
    parent: (&str, &str, &str),
) -> String {
    format!(
        "[project]\ngroup = \"{group}\"\nartifact = \"{artifact}\"\nversion = \"{version}\"\n\n\
         [parent]\ngroup = \"{}\"\nartifact = \"{}\"\nversion = \"{}\"\n",
        parent.0, parent.1, parent.2
    )
}
