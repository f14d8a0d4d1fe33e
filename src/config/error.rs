// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - PUIENV
//! Configuration error types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in settings file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
