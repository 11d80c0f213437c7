//! Build candidates
//!
//! A candidate is one project eligible to be built in the current batch:
//! its coordinate, the coordinates it depends on, and an optional parent.
//! Candidates are constructed from project metadata at the start of an
//! ordering or build request and are immutable for its duration.

use crate::config::defaults::DEFAULT_KIND;
use crate::core::coordinate::Coordinate;

/// One project eligible to be built
#[derive(Debug, Clone, PartialEq)]
pub struct BuildCandidate {
    /// Project identity
    pub coordinate: Coordinate,
    /// Declared dependencies, in declaration order
    pub dependencies: Vec<Coordinate>,
    /// Optional parent project
    pub parent: Option<Coordinate>,
    /// Packaging kind, used for display in error messages
    pub kind: String,
}

impl BuildCandidate {
    /// Create a candidate with no dependencies and the default kind
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            dependencies: Vec::new(),
            parent: None,
            kind: DEFAULT_KIND.to_string(),
        }
    }

    /// Add a dependency coordinate
    #[must_use]
    pub fn with_dependency(mut self, dependency: Coordinate) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Set the parent coordinate
    #[must_use]
    pub fn with_parent(mut self, parent: Coordinate) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the packaging kind
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Identity key ignoring the version: `group:artifact`
    pub fn versionless_key(&self) -> String {
        self.coordinate.versionless_key()
    }

    /// Full display identity: `group:artifact:kind:version`
    pub fn full_id(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.coordinate.group, self.coordinate.artifact, self.kind, self.coordinate.version
        )
    }
}
