//! Check command implementation
//!
//! Validates workspace manifests, coordinates, and relationships without
//! building.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::core::candidate::BuildCandidate;
use crate::core::check::check_workspace;
use crate::infra::workspace::scan_workspace_lenient;

/// Execute the check command
pub async fn execute(workspace_dir: &Path, json: bool) -> Result<()> {
    let scan = scan_workspace_lenient(workspace_dir)?;
    let candidates: Vec<BuildCandidate> = scan
        .projects
        .iter()
        .map(|p| p.manifest.to_candidate())
        .collect();

    let report = check_workspace(&candidates, &scan.errors);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Checked {} project(s)", report.project_count);

        for warning in &report.warnings {
            println!("  {} {warning}", status::WARNING);
        }
        for missing in &report.missing_dependencies {
            println!(
                "  {} dependency '{missing}' is not in the workspace (assumed satisfied)",
                status::INFO
            );
        }

        if report.valid {
            println!("{} Workspace is buildable", status::SUCCESS);
            for (position, id) in report.build_order.iter().enumerate() {
                println!("  {}. {id}", position + 1);
            }
        }
    }

    if !report.valid {
        bail!("Workspace validation failed");
    }

    Ok(())
}
