//! Infrastructure layer
//!
//! Filesystem and process implementations of the collaborator traits the
//! core orchestration logic is written against.
//!
//! # Submodules
//!
//! - [`workspace`] - Workspace scanning for project manifests
//! - [`sources`] - Project source resolution
//! - [`candidates`] - Build-candidate resolution over a workspace
//! - [`rewrite`] - Root-manifest dependency pinning
//! - [`invoker`] - External build command invocation

pub mod candidates;
pub mod invoker;
pub mod rewrite;
pub mod sources;
pub mod workspace;
