//! Build command implementation
//!
//! Implements `depbuild build`: either the whole workspace in dependency
//! order, or - with `--project` - just the missing dependencies of one
//! root project, followed by a rewrite of that project's manifest pins.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::config::defaults::{SESSION_DIR, SESSION_FILE};
use crate::core::candidate::BuildCandidate;
use crate::core::invocation::BuildConfiguration;
use crate::core::orchestrator::DependencyBuilder;
use crate::core::request::BuildRequest;
use crate::core::session::CompletedBuilds;
use crate::infra::candidates::WorkspaceCandidateResolver;
use crate::infra::invoker::ProcessInvoker;
use crate::infra::rewrite::WorkspaceManifestRewriter;
use crate::infra::sources::WorkspaceSourceResolver;
use crate::infra::workspace::{scan_workspace, WorkspaceProject};

/// Build options
pub struct BuildOptions {
    /// Build only this project's missing dependencies
    pub project: Option<String>,
    /// Resume the previous session
    pub resume: bool,
    /// Build command overriding the default
    pub command: Option<String>,
    /// Arguments for the build command
    pub args: Vec<String>,
}

/// Execute the build command
pub async fn execute(workspace_dir: &Path, options: BuildOptions) -> Result<()> {
    let projects = scan_workspace(workspace_dir)?;

    if projects.is_empty() {
        bail!(
            "No projects found under '{}'. A workspace contains project checkouts with project.toml manifests.",
            workspace_dir.display()
        );
    }

    let session_path = workspace_dir.join(SESSION_DIR).join(SESSION_FILE);
    let mut completed = if options.resume && session_path.exists() {
        CompletedBuilds::load(&session_path).with_context(|| "Failed to load session state")?
    } else {
        CompletedBuilds::new()
    };
    let already_completed = completed.len();

    if already_completed > 0 {
        tracing::info!("Resuming session with {already_completed} completed build(s)");
    }

    let prototype = options
        .command
        .as_ref()
        .map(|command| BuildConfiguration::new(command.clone()).with_args(options.args.clone()));

    let builder = DependencyBuilder::new(
        WorkspaceCandidateResolver::new(),
        WorkspaceSourceResolver::new(),
        WorkspaceManifestRewriter::new(),
        ProcessInvoker::new(),
    );

    let outcome = match &options.project {
        Some(selector) => {
            let root = find_project(&projects, selector)?;
            tracing::info!("Building missing dependencies of {}", root.full_id());

            // the root itself goes into the pending guard so its own chain
            // cannot re-enter it
            let pending = vec![root.coordinate.clone()];
            let mut request = BuildRequest::new(root, &mut completed, workspace_dir.to_path_buf())
                .with_pending(pending);
            if let Some(prototype) = prototype {
                request = request.with_prototype(prototype);
            }

            builder.build_missing_dependencies(&mut request)
        }
        None => {
            let candidates: Vec<BuildCandidate> = projects
                .iter()
                .map(|p| p.manifest.to_candidate())
                .collect();

            tracing::info!("Building {} project(s)", candidates.len());

            builder.build_candidates(&candidates, &mut completed, prototype.as_ref(), workspace_dir)
        }
    };

    // save the session before reporting so a retry skips the finished prefix
    if let Err(e) = completed.save(&session_path) {
        tracing::warn!("Failed to save session state: {e}");
    }

    let newly_built = completed.len() - already_completed;

    outcome?;

    println!("{} Build complete!", status::SUCCESS);
    println!("  Projects built this run: {newly_built}");
    if already_completed > 0 {
        println!("  Skipped from previous session: {already_completed}");
    }

    Ok(())
}

/// Match a project by artifact or group:artifact
fn find_project(projects: &[WorkspaceProject], selector: &str) -> Result<BuildCandidate> {
    let mut matches = projects.iter().filter(|p| {
        let coordinate = p.manifest.coordinate();
        coordinate.artifact == selector || coordinate.versionless_key() == selector
    });

    match (matches.next(), matches.next()) {
        (None, _) => bail!("Project '{selector}' not found in workspace"),
        (Some(_), Some(_)) => {
            bail!("Project selector '{selector}' is ambiguous; use group:artifact")
        }
        (Some(project), None) => Ok(project.manifest.to_candidate()),
    }
}
