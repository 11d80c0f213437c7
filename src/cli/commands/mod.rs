//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod doctor;
pub mod plan;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build workspace projects in dependency order
    Build {
        /// Workspace directory containing project checkouts
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,

        /// Build only this project's missing dependencies (artifact or group:artifact)
        #[arg(short, long)]
        project: Option<String>,

        /// Resume the previous session, skipping already-completed builds
        #[arg(long)]
        resume: bool,

        /// Build command to run in each project directory
        #[arg(long)]
        command: Option<String>,

        /// Argument for the build command (repeatable)
        #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the dependency-ordered build plan without building
    Plan {
        /// Workspace directory containing project checkouts
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },

    /// Validate workspace manifests, coordinates, and relationships
    Check {
        /// Workspace directory containing project checkouts
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },

    /// Check build prerequisites for the workspace
    Doctor {
        /// Workspace directory containing project checkouts
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, json: bool) -> Result<()> {
        match self {
            Self::Build {
                dir,
                project,
                resume,
                command,
                args,
            } => {
                let options = build::BuildOptions {
                    project,
                    resume,
                    command,
                    args,
                };
                build::execute(&dir, options).await
            }
            Self::Plan { dir } => plan::execute(&dir, json).await,
            Self::Check { dir } => check::execute(&dir, json).await,
            Self::Doctor { dir } => doctor::execute(&dir).await,
        }
    }
}
