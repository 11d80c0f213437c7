//! Project coordinates
//!
//! A coordinate is the `(group, artifact, version)` identity triple for a
//! project. Two candidates sharing a group and artifact are the same logical
//! project regardless of version, so identity checks go through the
//! versionless key.

use std::fmt;

/// Identity triple for one project
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Group the project belongs to
    pub group: String,
    /// Artifact name within the group
    pub artifact: String,
    /// Project version
    pub version: String,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Identity key ignoring the version: `group:artifact`
    pub fn versionless_key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
