//! Workspace scanning
//!
//! Finds project manifests in the immediate subdirectories of a workspace.
//! Results are sorted by directory name so every scan of an unchanged
//! workspace yields the same order.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::defaults::MANIFEST_FILE_NAME;
use crate::core::manifest::ProjectManifest;
use crate::error::WorkspaceError;

/// One project checkout found in a workspace
#[derive(Debug, Clone)]
pub struct WorkspaceProject {
    /// Directory the project lives in
    pub directory: PathBuf,
    /// Parsed manifest
    pub manifest: ProjectManifest,
}

/// Scan outcome keeping manifest failures as diagnostics
#[derive(Debug, Default)]
pub struct WorkspaceScan {
    /// Successfully parsed projects
    pub projects: Vec<WorkspaceProject>,
    /// Per-manifest load failures
    pub errors: Vec<String>,
}

/// Scan a workspace, failing on the first invalid manifest
pub fn scan_workspace(dir: &Path) -> Result<Vec<WorkspaceProject>, WorkspaceError> {
    let mut projects = Vec::new();

    for (project_dir, manifest_path) in manifest_paths(dir)? {
        let manifest = ProjectManifest::load(&manifest_path).map_err(|e| {
            WorkspaceError::InvalidManifest {
                path: manifest_path.clone(),
                error: e.to_string(),
            }
        })?;
        projects.push(WorkspaceProject {
            directory: project_dir,
            manifest,
        });
    }

    Ok(projects)
}

/// Scan a workspace, collecting invalid manifests as diagnostics instead of
/// failing
pub fn scan_workspace_lenient(dir: &Path) -> Result<WorkspaceScan, WorkspaceError> {
    let mut scan = WorkspaceScan::default();

    for (project_dir, manifest_path) in manifest_paths(dir)? {
        match ProjectManifest::load(&manifest_path) {
            Ok(manifest) => scan.projects.push(WorkspaceProject {
                directory: project_dir,
                manifest,
            }),
            Err(e) => scan.errors.push(format!("{}: {e}", manifest_path.display())),
        }
    }

    Ok(scan)
}

fn manifest_paths(dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>, WorkspaceError> {
    if !dir.is_dir() {
        return Err(WorkspaceError::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut found = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| WorkspaceError::Walk {
            path: dir.to_path_buf(),
            error: e.to_string(),
        })?;

        if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE_NAME {
            if let Some(project_dir) = entry.path().parent() {
                found.push((project_dir.to_path_buf(), entry.path().to_path_buf()));
            }
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project(workspace: &Path, name: &str, content: &str) {
        let dir = workspace.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(MANIFEST_FILE_NAME), content).unwrap();
    }

    fn manifest(artifact: &str) -> String {
        format!(
            "[project]\ngroup = \"org.test\"\nartifact = \"{artifact}\"\nversion = \"1.0\"\n"
        )
    }

    #[test]
    fn test_scan_finds_projects_sorted_by_directory() {
        let workspace = TempDir::new().unwrap();
        write_project(workspace.path(), "zebra", &manifest("zebra"));
        write_project(workspace.path(), "alpha", &manifest("alpha"));

        let projects = scan_workspace(workspace.path()).unwrap();

        let artifacts: Vec<&str> = projects
            .iter()
            .map(|p| p.manifest.project.artifact.as_str())
            .collect();
        assert_eq!(artifacts, ["alpha", "zebra"]);
    }

    #[test]
    fn test_scan_ignores_directories_without_manifest() {
        let workspace = TempDir::new().unwrap();
        write_project(workspace.path(), "real", &manifest("real"));
        std::fs::create_dir_all(workspace.path().join("no-manifest")).unwrap();
        std::fs::write(workspace.path().join("stray.toml"), "x = 1").unwrap();

        let projects = scan_workspace(workspace.path()).unwrap();
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_strict_scan_fails_on_invalid_manifest() {
        let workspace = TempDir::new().unwrap();
        write_project(workspace.path(), "broken", "not toml [");

        let result = scan_workspace(workspace.path());
        assert!(matches!(result, Err(WorkspaceError::InvalidManifest { .. })));
    }

    #[test]
    fn test_lenient_scan_collects_invalid_manifests() {
        let workspace = TempDir::new().unwrap();
        write_project(workspace.path(), "good", &manifest("good"));
        write_project(workspace.path(), "broken", "not toml [");

        let scan = scan_workspace_lenient(workspace.path()).unwrap();

        assert_eq!(scan.projects.len(), 1);
        assert_eq!(scan.errors.len(), 1);
        assert!(scan.errors[0].contains("broken"));
    }

    #[test]
    fn test_missing_workspace_is_an_error() {
        let workspace = TempDir::new().unwrap();
        let result = scan_workspace(&workspace.path().join("absent"));
        assert!(matches!(result, Err(WorkspaceError::NotFound { .. })));
    }
}
