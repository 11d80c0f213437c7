//! Output formatting
//!
//! Applies the global verbosity flags to the tracing subscriber and formats
//! user-facing status and error messages.

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Global output configuration derived from CLI flags
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Emit machine-readable output
    pub json: bool,
    /// Verbosity level (0 = warn, 1 = info, 2+ = debug)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Tracing level implied by the flags
    pub fn level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else {
            match self.verbose {
                0 => tracing::Level::WARN,
                1 => tracing::Level::INFO,
                _ => tracing::Level::DEBUG,
            }
        }
    }

    /// Install the global tracing subscriber for this configuration.
    ///
    /// Must be called once, before any command runs.
    pub fn apply_global(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(self.level().into()),
            )
            .with_target(false)
            .init();
    }
}

/// Display a top-level error to the user
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}
