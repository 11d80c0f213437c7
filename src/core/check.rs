//! Workspace validation logic
//!
//! Validates a scanned workspace without building: manifest errors,
//! duplicate coordinates, cycles, and prerequisites that are not present in
//! the workspace (the latter are reported for visibility but assumed to be
//! satisfied externally).

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::core::candidate::BuildCandidate;
use crate::core::orderer::order_candidates;

/// Result of validating a workspace
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Number of projects found
    pub project_count: usize,
    /// Dependency-ordered full ids, when ordering succeeded
    pub build_order: Vec<String>,
    /// Prerequisites referenced but not present in the workspace
    pub missing_dependencies: Vec<String>,
    /// Problems encountered during validation
    pub warnings: Vec<String>,
    /// Whether the workspace can be built as-is
    pub valid: bool,
}

/// Validate a candidate set plus any manifest errors from scanning
pub fn check_workspace(candidates: &[BuildCandidate], manifest_errors: &[String]) -> CheckReport {
    let mut report = CheckReport {
        project_count: candidates.len(),
        build_order: Vec::new(),
        missing_dependencies: Vec::new(),
        warnings: manifest_errors.to_vec(),
        valid: manifest_errors.is_empty(),
    };

    let known: HashSet<String> = candidates.iter().map(BuildCandidate::versionless_key).collect();

    let mut missing = BTreeSet::new();
    for candidate in candidates {
        let prerequisites = candidate.dependencies.iter().chain(candidate.parent.as_ref());
        for prerequisite in prerequisites {
            let key = prerequisite.versionless_key();
            if !known.contains(&key) {
                missing.insert(key);
            }
        }
    }
    report.missing_dependencies = missing.into_iter().collect();

    match order_candidates(candidates) {
        Ok(ordered) => {
            report.build_order = ordered.iter().map(BuildCandidate::full_id).collect();
        }
        Err(e) => {
            report.valid = false;
            report.warnings.push(e.to_string());
        }
    }

    report
}
