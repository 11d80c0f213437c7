//! Root-manifest dependency pinning
//!
//! After missing dependencies were built, the root project's manifest is
//! rewritten so its dependency and parent versions match the versions that
//! were actually built. Manifest mutation happens only here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::defaults::MANIFEST_FILE_NAME;
use crate::core::candidate::BuildCandidate;
use crate::core::manifest::ProjectManifest;
use crate::core::orchestrator::ManifestRewriter;
use crate::error::BuildError;

/// Rewrites root manifests on disk after dependency builds
#[derive(Debug, Default)]
pub struct WorkspaceManifestRewriter;

impl WorkspaceManifestRewriter {
    /// Create a new rewriter
    pub fn new() -> Self {
        Self
    }

    fn root_manifest_path(root: &BuildCandidate, projects_directory: &Path) -> Option<PathBuf> {
        let coordinate = &root.coordinate;
        let locations = [
            projects_directory.join(&coordinate.artifact),
            projects_directory.join(format!("{}-{}", coordinate.artifact, coordinate.version)),
        ];

        locations
            .into_iter()
            .map(|dir| dir.join(MANIFEST_FILE_NAME))
            .find(|path| path.is_file())
    }
}

impl ManifestRewriter for WorkspaceManifestRewriter {
    fn rewrite(
        &self,
        root: &BuildCandidate,
        candidates: &[BuildCandidate],
        projects_directory: &Path,
    ) -> Result<Vec<BuildCandidate>, BuildError> {
        let Some(manifest_path) = Self::root_manifest_path(root, projects_directory) else {
            return Err(BuildError::Rewrite(format!(
                "manifest for '{}' not found under '{}'",
                root.full_id(),
                projects_directory.display()
            )));
        };

        let mut manifest =
            ProjectManifest::load(&manifest_path).map_err(|e| BuildError::Rewrite(e.to_string()))?;

        let built: HashMap<String, &BuildCandidate> = candidates
            .iter()
            .map(|c| (c.versionless_key(), c))
            .collect();

        let mut changed = false;

        for dependency in &mut manifest.dependencies {
            let key = format!("{}:{}", dependency.group, dependency.artifact);
            if let Some(candidate) = built.get(&key) {
                if dependency.version != candidate.coordinate.version {
                    tracing::info!(
                        "Pinning dependency {key} of {} to version {}",
                        root.versionless_key(),
                        candidate.coordinate.version
                    );
                    dependency.version = candidate.coordinate.version.clone();
                    changed = true;
                }
            }
        }

        if let Some(parent) = &mut manifest.parent {
            let key = format!("{}:{}", parent.group, parent.artifact);
            if let Some(candidate) = built.get(&key) {
                if parent.version != candidate.coordinate.version {
                    parent.version = candidate.coordinate.version.clone();
                    changed = true;
                }
            }
        }

        if changed {
            manifest
                .save(&manifest_path)
                .map_err(|e| BuildError::Rewrite(e.to_string()))?;
        }

        Ok(candidates.to_vec())
    }
}
