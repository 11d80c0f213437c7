//! On-demand build requests
//!
//! A [`BuildRequest`] bundles everything one `build_missing_dependencies`
//! call needs. The completed-builds accumulator stays owned by the caller
//! and is threaded through by mutable reference so it survives across
//! requests within a session.

use std::path::PathBuf;

use crate::core::candidate::BuildCandidate;
use crate::core::coordinate::Coordinate;
use crate::core::invocation::BuildConfiguration;
use crate::core::session::CompletedBuilds;

/// One on-demand dependency-build request
#[derive(Debug)]
pub struct BuildRequest<'a> {
    /// Project whose missing dependencies should be built
    pub root: BuildCandidate,
    /// Prototype configuration; a default is used when absent
    pub build_prototype: Option<BuildConfiguration>,
    /// Caller-owned accumulator of completed builds
    pub completed_builds: &'a mut CompletedBuilds,
    /// Projects already in flight; the caller extends this before recursing
    /// so a dependency chain cannot re-enter itself
    pub pending: Vec<Coordinate>,
    /// Directory the per-project checkouts live under
    pub projects_directory: PathBuf,
}

impl<'a> BuildRequest<'a> {
    /// Create a request with no prototype and no pending projects
    pub fn new(
        root: BuildCandidate,
        completed_builds: &'a mut CompletedBuilds,
        projects_directory: PathBuf,
    ) -> Self {
        Self {
            root,
            build_prototype: None,
            completed_builds,
            pending: Vec::new(),
            projects_directory,
        }
    }

    /// Set the prototype configuration
    #[must_use]
    pub fn with_prototype(mut self, prototype: BuildConfiguration) -> Self {
        self.build_prototype = Some(prototype);
        self
    }

    /// Set the pending-projects guard
    #[must_use]
    pub fn with_pending(mut self, pending: Vec<Coordinate>) -> Self {
        self.pending = pending;
        self
    }
}
