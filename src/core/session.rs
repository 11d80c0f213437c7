//! Completed-builds session state
//!
//! Tracks which projects finished building successfully in the current
//! session. The caller owns the accumulator and reuses it across
//! orchestration calls so retried batches skip the completed prefix; only
//! strictly successful builds are ever recorded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::DepbuildError;

/// Versionless keys of projects built successfully this session
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedBuilds {
    completed: BTreeSet<String>,
}

impl CompletedBuilds {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a project has already been built this session
    pub fn contains(&self, key: &str) -> bool {
        self.completed.contains(key)
    }

    /// Record a successful build
    pub fn insert(&mut self, key: String) {
        self.completed.insert(key);
    }

    /// Number of completed builds
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether nothing has completed yet
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Load session state from disk
    pub fn load(path: &Path) -> Result<Self, DepbuildError> {
        let content = std::fs::read_to_string(path).map_err(|e| DepbuildError::Session {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| DepbuildError::Session {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Write session state to disk, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), DepbuildError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DepbuildError::Session {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| DepbuildError::Session {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| DepbuildError::Session {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }
}
