//! On-demand build orchestration
//!
//! Drives the end-to-end flow: order the candidates, resolve each
//! candidate's sources, invoke its external build, record successes in the
//! caller's completed-builds set, and abort the whole batch on the first
//! failure. Builds run strictly sequentially; the only state shared across
//! calls is the completed-builds accumulator.

use std::path::{Path, PathBuf};

use crate::core::candidate::BuildCandidate;
use crate::core::coordinate::Coordinate;
use crate::core::invocation::{BuildConfiguration, BuildInvoker};
use crate::core::orderer::order_candidates;
use crate::core::request::BuildRequest;
use crate::core::session::CompletedBuilds;
use crate::error::BuildError;

/// Diagnostic accumulator collaborators record resolution details into
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic message
    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Whether anything was recorded
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render all recorded messages, one per line
    pub fn render(&self) -> String {
        self.messages.join("\n")
    }
}

/// Locates the source directory for a candidate
///
/// Failure is communicated by returning `None`; diagnostics go into the
/// supplied log.
pub trait ProjectSourceResolver {
    fn resolve_project_sources(
        &self,
        candidate: &BuildCandidate,
        projects_directory: &Path,
        log: &mut MessageLog,
    ) -> Option<PathBuf>;
}

/// Computes the candidate set needed to satisfy a root project
pub trait CandidateResolver {
    fn resolve_candidates(
        &self,
        root: &BuildCandidate,
        pending: &[Coordinate],
        completed: &CompletedBuilds,
        projects_directory: &Path,
        recursive: bool,
    ) -> Result<Vec<BuildCandidate>, BuildError>;
}

/// Rewrites a root project's manifest after its dependencies were built
///
/// Manifest mutation is the rewriter's exclusive responsibility; the
/// orchestrator accepts the returned candidate list without acting on it.
pub trait ManifestRewriter {
    fn rewrite(
        &self,
        root: &BuildCandidate,
        candidates: &[BuildCandidate],
        projects_directory: &Path,
    ) -> Result<Vec<BuildCandidate>, BuildError>;
}

/// Orchestrates dependency-ordered builds over external collaborators
pub struct DependencyBuilder<C, S, R, I> {
    candidate_resolver: C,
    source_resolver: S,
    rewriter: R,
    invoker: I,
}

impl<C, S, R, I> DependencyBuilder<C, S, R, I>
where
    C: CandidateResolver,
    S: ProjectSourceResolver,
    R: ManifestRewriter,
    I: BuildInvoker,
{
    /// Create a builder over the four collaborators
    pub fn new(candidate_resolver: C, source_resolver: S, rewriter: R, invoker: I) -> Self {
        Self {
            candidate_resolver,
            source_resolver,
            rewriter,
            invoker,
        }
    }

    /// Build every candidate not yet completed, in dependency order.
    ///
    /// Successful candidates are added to `completed_builds` as they
    /// finish, so a retried call skips them. A source-resolution failure or
    /// a failed build aborts the batch immediately; the failed candidate is
    /// never recorded as completed and will be retried in full next time.
    pub fn build_candidates(
        &self,
        candidates: &[BuildCandidate],
        completed_builds: &mut CompletedBuilds,
        prototype: Option<&BuildConfiguration>,
        projects_directory: &Path,
    ) -> Result<(), BuildError> {
        let ordered = order_candidates(candidates)?;

        for candidate in &ordered {
            let key = candidate.versionless_key();

            if completed_builds.contains(&key) {
                tracing::debug!("Skipping {key}: already built this session");
                continue;
            }

            let mut log = MessageLog::new();
            let Some(project_dir) =
                self.source_resolver
                    .resolve_project_sources(candidate, projects_directory, &mut log)
            else {
                return Err(BuildError::SourceResolution {
                    id: candidate.full_id(),
                    details: if log.is_empty() {
                        String::new()
                    } else {
                        format!("\n{}", log.render())
                    },
                });
            };

            let config = prototype
                .cloned()
                .unwrap_or_default()
                .with_base_directory(project_dir);

            self.build_project(candidate, &config)?;

            completed_builds.insert(key);
        }

        Ok(())
    }

    /// Resolve and build the missing dependencies of a root project, then
    /// let the rewriter update the root's manifest to reflect the newly
    /// available artifacts.
    pub fn build_missing_dependencies(&self, request: &mut BuildRequest<'_>) -> Result<(), BuildError> {
        let candidates = self.candidate_resolver.resolve_candidates(
            &request.root,
            &request.pending,
            request.completed_builds,
            &request.projects_directory,
            true,
        )?;

        self.build_candidates(
            &candidates,
            request.completed_builds,
            request.build_prototype.as_ref(),
            &request.projects_directory,
        )?;

        let _rewritten =
            self.rewriter
                .rewrite(&request.root, &candidates, &request.projects_directory)?;

        Ok(())
    }

    fn build_project(
        &self,
        candidate: &BuildCandidate,
        config: &BuildConfiguration,
    ) -> Result<(), BuildError> {
        tracing::info!("Building {}", candidate.full_id());

        let result = match self.invoker.execute(config) {
            Ok(result) => result,
            Err(e) => {
                return Err(BuildError::BuildFailed {
                    id: candidate.full_id(),
                    reason: format!("could not invoke build: {e}"),
                })
            }
        };

        if let Some(error) = result.execution_error {
            return Err(BuildError::BuildFailed {
                id: candidate.full_id(),
                reason: format!("execution error: {error}"),
            });
        }

        if result.exit_code != 0 {
            return Err(BuildError::BuildFailed {
                id: candidate.full_id(),
                reason: format!("returned exit code: {}", result.exit_code),
            });
        }

        tracing::info!("Built {}", candidate.full_id());
        Ok(())
    }
}
