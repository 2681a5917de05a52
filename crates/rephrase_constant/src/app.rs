//! Application metadata constants

pub const NAME: &str = "rephrase";
pub const DISPLAY_NAME: &str = "query-rephraser";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Rewrite the latest conversational turn into a retrieval-ready query";

/// Directory name for rephraser settings (under home or a project root)
pub const DATA_DIR: &str = ".rephrase";
/// Env file inside DATA_DIR
pub const ENV_FILE: &str = "env";
