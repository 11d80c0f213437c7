//! Project source resolution
//!
//! Locates a candidate's checkout under the workspace projects directory.
//! A checkout lives either in a directory named after the artifact or in an
//! `artifact-version` directory; it must carry a project manifest.

use std::path::{Path, PathBuf};

use crate::config::defaults::MANIFEST_FILE_NAME;
use crate::core::candidate::BuildCandidate;
use crate::core::orchestrator::{MessageLog, ProjectSourceResolver};

/// Resolves candidate sources against workspace checkouts
#[derive(Debug, Default)]
pub struct WorkspaceSourceResolver;

impl WorkspaceSourceResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self
    }
}

impl ProjectSourceResolver for WorkspaceSourceResolver {
    fn resolve_project_sources(
        &self,
        candidate: &BuildCandidate,
        projects_directory: &Path,
        log: &mut MessageLog,
    ) -> Option<PathBuf> {
        let coordinate = &candidate.coordinate;
        let locations = [
            projects_directory.join(&coordinate.artifact),
            projects_directory.join(format!("{}-{}", coordinate.artifact, coordinate.version)),
        ];

        for dir in locations {
            if dir.join(MANIFEST_FILE_NAME).is_file() {
                tracing::debug!("Resolved sources for {} at {}", coordinate, dir.display());
                return Some(dir);
            }
            log.add(format!("no project manifest under '{}'", dir.display()));
        }

        None
    }
}
