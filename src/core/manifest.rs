//! Manifest (project.toml) parsing and validation
//!
//! Every project checkout in a workspace carries a `project.toml` declaring
//! its coordinate, its dependencies, and an optional parent project.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::defaults::DEFAULT_KIND;
use crate::core::candidate::BuildCandidate;
use crate::core::coordinate::Coordinate;
use crate::error::ManifestError;

/// A project manifest describing one buildable project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectManifest {
    /// Project identity
    pub project: ProjectSection,

    /// Optional parent project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<CoordinateSection>,

    /// Declared dependencies, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<CoordinateSection>,
}

/// Project identity section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSection {
    /// Group the project belongs to
    pub group: String,

    /// Artifact name within the group
    pub artifact: String,

    /// Project version
    pub version: String,

    /// Packaging kind
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

/// A coordinate reference in a manifest (parent or dependency)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoordinateSection {
    /// Group of the referenced project
    pub group: String,

    /// Artifact of the referenced project
    pub artifact: String,

    /// Version of the referenced project
    pub version: String,
}

impl CoordinateSection {
    /// Convert into a [`Coordinate`]
    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group, &self.artifact, &self.version)
    }
}

impl ProjectManifest {
    /// Parse and validate a manifest from TOML
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize the manifest back to TOML
    pub fn to_toml(&self) -> Result<String, ManifestError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Write the manifest to disk
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ManifestError> {
        let required = [
            ("project.group", &self.project.group),
            ("project.artifact", &self.project.artifact),
            ("project.version", &self.project.version),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ManifestError::MissingField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The project's coordinate
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            &self.project.group,
            &self.project.artifact,
            &self.project.version,
        )
    }

    /// Convert into a build candidate
    pub fn to_candidate(&self) -> BuildCandidate {
        BuildCandidate {
            coordinate: self.coordinate(),
            dependencies: self
                .dependencies
                .iter()
                .map(CoordinateSection::to_coordinate)
                .collect(),
            parent: self.parent.as_ref().map(CoordinateSection::to_coordinate),
            kind: self.project.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MANIFEST: &str = r#"
[project]
group = "org.example"
artifact = "core"
version = "1.2.0"
kind = "bin"

[parent]
group = "org.example"
artifact = "parent"
version = "1.0"

[[dependencies]]
group = "org.example"
artifact = "util"
version = "0.3.0"

[[dependencies]]
group = "org.other"
artifact = "codec"
version = "2.1.0"
"#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = ProjectManifest::from_toml(FULL_MANIFEST).unwrap();

        assert_eq!(manifest.project.group, "org.example");
        assert_eq!(manifest.project.kind, "bin");
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(manifest.dependencies[0].artifact, "util");
        assert!(manifest.parent.is_some());
    }

    #[test]
    fn test_parse_minimal_manifest_defaults_kind() {
        let manifest = ProjectManifest::from_toml(
            r#"
[project]
group = "g"
artifact = "a"
version = "1"
"#,
        )
        .unwrap();

        assert_eq!(manifest.project.kind, "lib");
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.parent.is_none());
    }

    #[test]
    fn test_empty_required_field_is_rejected() {
        let result = ProjectManifest::from_toml(
            r#"
[project]
group = "g"
artifact = ""
version = "1"
"#,
        );

        match result {
            Err(ManifestError::MissingField { field }) => {
                assert_eq!(field, "project.artifact");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = ProjectManifest::from_toml("not toml at all [");
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_to_candidate_carries_relationships() {
        let manifest = ProjectManifest::from_toml(FULL_MANIFEST).unwrap();
        let candidate = manifest.to_candidate();

        assert_eq!(candidate.versionless_key(), "org.example:core");
        assert_eq!(candidate.kind, "bin");
        assert_eq!(candidate.dependencies.len(), 2);
        assert_eq!(
            candidate.parent.as_ref().map(Coordinate::versionless_key),
            Some("org.example:parent".to_string())
        );
    }

    #[test]
    fn test_serialized_manifest_parses_back() {
        let manifest = ProjectManifest::from_toml(FULL_MANIFEST).unwrap();
        let rendered = manifest.to_toml().unwrap();
        let reparsed = ProjectManifest::from_toml(&rendered).unwrap();

        assert_eq!(manifest, reparsed);
    }
}
