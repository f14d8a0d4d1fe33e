// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - PUIENV
//
//! PUIENV Configuration Module
//! The run mode picks a variable prefix and a `.puienv` settings file.

mod error;
mod loader;
mod settings;
mod types;

pub use error::ConfigError;
pub use loader::bootstrap;
pub use settings::Settings;
pub use types::{
    EnvironmentProfile, Mode, APP_ROOT_VAR, DEFAULT_APP_ROOT, HOME_VAR, MODE_VAR,
    SETTINGS_FILE_NAME,
};
