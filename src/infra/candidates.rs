//! Build-candidate resolution over a workspace
//!
//! Computes which workspace projects must be built to satisfy a root
//! project's dependencies: the transitive closure of its dependency and
//! parent references, minus everything already completed, already pending,
//! and the root itself. References with no matching workspace project are
//! skipped; they are assumed to be satisfied externally.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use crate::core::candidate::BuildCandidate;
use crate::core::coordinate::Coordinate;
use crate::core::orchestrator::CandidateResolver;
use crate::core::session::CompletedBuilds;
use crate::error::BuildError;
use crate::infra::workspace::{scan_workspace, WorkspaceProject};

/// Resolves candidates by scanning workspace manifests
#[derive(Debug, Default)]
pub struct WorkspaceCandidateResolver;

impl WorkspaceCandidateResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self
    }
}

impl CandidateResolver for WorkspaceCandidateResolver {
    fn resolve_candidates(
        &self,
        root: &BuildCandidate,
        pending: &[Coordinate],
        completed: &CompletedBuilds,
        projects_directory: &Path,
        recursive: bool,
    ) -> Result<Vec<BuildCandidate>, BuildError> {
        let projects =
            scan_workspace(projects_directory).map_err(|e| BuildError::CandidateResolution(e.to_string()))?;

        let by_key: HashMap<String, &WorkspaceProject> = projects
            .iter()
            .map(|p| (p.manifest.coordinate().versionless_key(), p))
            .collect();

        let pending_keys: HashSet<String> =
            pending.iter().map(Coordinate::versionless_key).collect();
        let root_key = root.versionless_key();

        let mut queue: VecDeque<Coordinate> = root.dependencies.iter().cloned().collect();
        if let Some(parent) = &root.parent {
            queue.push_back(parent.clone());
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates = Vec::new();

        while let Some(coordinate) = queue.pop_front() {
            let key = coordinate.versionless_key();

            if !seen.insert(key.clone()) {
                continue;
            }
            if key == root_key || completed.contains(&key) || pending_keys.contains(&key) {
                continue;
            }
            let Some(project) = by_key.get(&key) else {
                // not checked out in this workspace; assumed satisfied
                tracing::debug!("Dependency {key} not found in workspace, skipping");
                continue;
            };

            let candidate = project.manifest.to_candidate();

            if recursive {
                for dependency in &candidate.dependencies {
                    queue.push_back(dependency.clone());
                }
                if let Some(parent) = &candidate.parent {
                    queue.push_back(parent.clone());
                }
            }

            candidates.push(candidate);
        }

        Ok(candidates)
    }
}
