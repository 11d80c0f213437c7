//! Default configuration values

/// Project manifest file name
pub const MANIFEST_FILE_NAME: &str = "project.toml";

/// Session state directory inside a workspace
pub const SESSION_DIR: &str = ".depbuild";

/// Completed-builds session file name
pub const SESSION_FILE: &str = "session.json";

/// Build command used when no prototype configuration is supplied
pub const DEFAULT_BUILD_COMMAND: &str = "make";

/// Packaging kind used when a project does not declare one
pub const DEFAULT_KIND: &str = "lib";
