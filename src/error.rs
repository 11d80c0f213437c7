//! Error types for depbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest parsing and validation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Malformed TOML
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serialization failure when writing a manifest back
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Required field empty or absent
    #[error("Manifest is missing required field '{field}'")]
    MissingField { field: String },

    /// IO error reading or writing a manifest
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Candidate-ordering errors
#[derive(Error, Debug)]
pub enum OrderError {
    /// Two candidates share the same group:artifact key
    #[error("Project '{key}' is duplicated in the build-candidate set")]
    Duplicated { key: String },

    /// A dependency or parent chain closes on itself
    #[error("Cycle detected with dependency: {prerequisite} of project: {dependent}")]
    CycleDetected {
        prerequisite: String,
        dependent: String,
    },
}

/// Build-invocation launch errors
#[derive(Error, Debug)]
pub enum InvokerError {
    /// The build command could not be started at all
    #[error("Failed to launch build command '{command}': {error}")]
    Launch { command: String, error: String },
}

/// Orchestration errors
///
/// Umbrella propagation type for everything that can abort a build batch.
/// Messages carry the failing candidate's identity inline.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Ordering failed before any build was attempted
    #[error(transparent)]
    Order(#[from] OrderError),

    /// A candidate's source directory could not be located
    #[error("Failed to resolve project sources for: {id}{details}")]
    SourceResolution { id: String, details: String },

    /// The external build reported failure for a candidate
    #[error("Build for project: {id} failed; {reason}")]
    BuildFailed { id: String, reason: String },

    /// The candidate resolver could not compute the candidate set
    #[error("Failed to resolve build candidates: {0}")]
    CandidateResolution(String),

    /// The manifest rewriter failed after the builds completed
    #[error("Failed to rewrite manifest: {0}")]
    Rewrite(String),
}

/// Workspace scanning errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Workspace directory missing
    #[error("Workspace directory not found: {path}")]
    NotFound { path: PathBuf },

    /// Directory traversal failure
    #[error("Failed to walk workspace '{path}': {error}")]
    Walk { path: PathBuf, error: String },

    /// A project manifest failed to load
    #[error("Invalid manifest at '{path}': {error}")]
    InvalidManifest { path: PathBuf, error: String },
}

/// Top-level depbuild error type
#[derive(Error, Debug)]
pub enum DepbuildError {
    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Ordering error
    #[error("Ordering error: {0}")]
    Order(#[from] OrderError),

    /// Invoker error
    #[error("Invoker error: {0}")]
    Invoker(#[from] InvokerError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Workspace error
    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    /// Session state error
    #[error("Session state error for '{path}': {error}")]
    Session { path: PathBuf, error: String },

    /// Generic error
    #[error("{0}")]
    Generic(String),
}
