//! Plan command implementation
//!
//! Prints the dependency-ordered build plan for a workspace without
//! building anything.

use anyhow::Result;
use std::path::Path;

use crate::core::candidate::BuildCandidate;
use crate::core::orderer::order_candidates;
use crate::infra::workspace::scan_workspace;

/// Execute the plan command
pub async fn execute(workspace_dir: &Path, json: bool) -> Result<()> {
    let projects = scan_workspace(workspace_dir)?;
    let candidates: Vec<BuildCandidate> = projects
        .iter()
        .map(|p| p.manifest.to_candidate())
        .collect();

    let ordered = order_candidates(&candidates)?;

    if json {
        let ids: Vec<String> = ordered.iter().map(BuildCandidate::full_id).collect();
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else if ordered.is_empty() {
        println!("No projects found under '{}'", workspace_dir.display());
    } else {
        println!("Build order ({} projects):", ordered.len());
        for (position, candidate) in ordered.iter().enumerate() {
            println!("  {}. {}", position + 1, candidate.full_id());
        }
    }

    Ok(())
}
