//! Configuration module
//!
//! CLI configuration shared by all commands.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the sandbox backend
    pub backend_url: String,
}
