//! Doctor command implementation
//!
//! Checks build prerequisites: the workspace itself, its manifests, the
//! default build command, and any resumable session state.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::config::defaults::{DEFAULT_BUILD_COMMAND, SESSION_DIR, SESSION_FILE};
use crate::core::session::CompletedBuilds;
use crate::infra::workspace::scan_workspace_lenient;

/// Execute the doctor command
pub async fn execute(workspace_dir: &Path) -> Result<()> {
    let mut failures = 0;

    if workspace_dir.is_dir() {
        println!(
            "{} workspace directory: {}",
            status::SUCCESS,
            workspace_dir.display()
        );

        match scan_workspace_lenient(workspace_dir) {
            Ok(scan) => {
                println!(
                    "{} {} project manifest(s) found",
                    status::SUCCESS,
                    scan.projects.len()
                );
                for error in &scan.errors {
                    println!("{} {error}", status::ERROR);
                    failures += 1;
                }
            }
            Err(e) => {
                println!("{} {e}", status::ERROR);
                failures += 1;
            }
        }
    } else {
        println!(
            "{} workspace directory not found: {}",
            status::ERROR,
            workspace_dir.display()
        );
        failures += 1;
    }

    match which::which(DEFAULT_BUILD_COMMAND) {
        Ok(path) => println!(
            "{} default build command '{DEFAULT_BUILD_COMMAND}' found at {}",
            status::SUCCESS,
            path.display()
        ),
        Err(_) => println!(
            "{} default build command '{DEFAULT_BUILD_COMMAND}' not found in PATH (pass --command to override)",
            status::WARNING
        ),
    }

    let session_path = workspace_dir.join(SESSION_DIR).join(SESSION_FILE);
    if session_path.exists() {
        match CompletedBuilds::load(&session_path) {
            Ok(completed) => println!(
                "{} resumable session with {} completed build(s)",
                status::INFO,
                completed.len()
            ),
            Err(e) => {
                println!("{} session state unreadable: {e}", status::ERROR);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} issue(s) found");
    }

    println!("{} All checks passed", status::SUCCESS);
    Ok(())
}
