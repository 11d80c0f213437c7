//! External build command invocation
//!
//! Runs a candidate's build command as a blocking child process in the
//! configured directory. Stdout and stderr are inherited so build output
//! reaches the user directly.

use std::process::Command;

use crate::core::invocation::{BuildConfiguration, BuildInvoker, InvocationResult};
use crate::error::InvokerError;

/// Invokes builds as child processes
#[derive(Debug, Default)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    /// Create a new invoker
    pub fn new() -> Self {
        Self
    }
}

impl BuildInvoker for ProcessInvoker {
    fn execute(&self, config: &BuildConfiguration) -> Result<InvocationResult, InvokerError> {
        let mut command = Command::new(&config.command);
        command.args(&config.args);

        if let Some(dir) = &config.base_directory {
            command.current_dir(dir);
        }

        tracing::debug!("Running {} {:?}", config.command, config.args);

        let status = command.status().map_err(|e| InvokerError::Launch {
            command: config.command.clone(),
            error: e.to_string(),
        })?;

        match status.code() {
            Some(code) => Ok(InvocationResult {
                exit_code: code,
                execution_error: None,
            }),
            // no exit code: the process was killed by a signal
            None => Ok(InvocationResult::errored(format!(
                "build command '{}' was terminated by a signal",
                config.command
            ))),
        }
    }
}
