// PUIENV Library
// Business error tagging and mode-aware settings bootstrap

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{bootstrap, ConfigError, EnvironmentProfile, Mode, Settings};
pub use errors::{find_business_error, BusinessError, ErrorKind};

// Re-export commonly used types
pub use anyhow::{Context, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
