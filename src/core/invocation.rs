//! Build configuration and invocation contract
//!
//! A [`BuildConfiguration`] is the prototype handed to the build invoker;
//! the orchestrator clones it per candidate and points it at the resolved
//! source directory without interpreting it further.

use std::path::PathBuf;

use crate::config::defaults::DEFAULT_BUILD_COMMAND;
use crate::error::InvokerError;

/// Prototype configuration for one external build invocation
#[derive(Debug, Clone)]
pub struct BuildConfiguration {
    /// Command to run
    pub command: String,
    /// Arguments for the command
    pub args: Vec<String>,
    /// Directory to run the command in
    pub base_directory: Option<PathBuf>,
}

impl Default for BuildConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_COMMAND)
    }
}

impl BuildConfiguration {
    /// Create a configuration running `command` with no arguments
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            base_directory: None,
        }
    }

    /// Set the command arguments
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the directory the command runs in
    #[must_use]
    pub fn with_base_directory(mut self, dir: PathBuf) -> Self {
        self.base_directory = Some(dir);
        self
    }
}

/// Outcome reported by a completed build invocation
#[derive(Debug, Clone)]
pub struct InvocationResult {
    /// Exit code of the build command
    pub exit_code: i32,
    /// Error raised while the command was executing, if any
    pub execution_error: Option<String>,
}

impl InvocationResult {
    /// A clean zero-exit result
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            execution_error: None,
        }
    }

    /// A result that ran to completion with a non-zero exit code
    pub fn failed(exit_code: i32) -> Self {
        Self {
            exit_code,
            execution_error: None,
        }
    }

    /// A result carrying an execution error
    pub fn errored(message: impl Into<String>) -> Self {
        Self {
            exit_code: -1,
            execution_error: Some(message.into()),
        }
    }
}

/// Runs one build to completion
///
/// `execute` blocks until the external command finishes. The `Err` arm
/// means the build could not be launched at all; failures of a launched
/// build are reported through the [`InvocationResult`].
pub trait BuildInvoker {
    fn execute(&self, config: &BuildConfiguration) -> Result<InvocationResult, InvokerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_uses_default_command() {
        let config = BuildConfiguration::default();
        assert_eq!(config.command, "make");
        assert!(config.args.is_empty());
        assert!(config.base_directory.is_none());
    }

    #[test]
    fn test_prototype_clone_keeps_command_and_args() {
        let prototype =
            BuildConfiguration::new("sh").with_args(vec!["-c".to_string(), "true".to_string()]);

        let config = prototype.clone().with_base_directory(PathBuf::from("/tmp/project"));

        assert_eq!(config.command, prototype.command);
        assert_eq!(config.args, prototype.args);
        assert_eq!(config.base_directory, Some(PathBuf::from("/tmp/project")));
        assert!(prototype.base_directory.is_none());
    }
}
