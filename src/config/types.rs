// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - PUIENV
//
//! Configuration type definitions
//! Run mode and the environment profile derived from it.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the settings file, identical for every mode.
pub const SETTINGS_FILE_NAME: &str = ".puienv";

/// Application root used for production and develop settings.
pub const DEFAULT_APP_ROOT: &str = "/src";

pub const MODE_VAR: &str = "NODE_ENV";
pub const HOME_VAR: &str = "HOME";
pub const APP_ROOT_VAR: &str = "PUIENV_APP_ROOT";

/// Run mode
///
/// Only the exact literals `production` and `develop` are recognised.
/// Everything else, including an unset or empty value, selects `Test`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Production,
    Develop,
    Test,
}

impl Mode {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Mode::Production,
            Some("develop") => Mode::Develop,
            _ => Mode::Test,
        }
    }

    /// Prefix prepended to configuration variable names in this mode.
    pub fn prefix(&self) -> &'static str {
        match self {
            Mode::Production => "",
            Mode::Develop => "DEV_",
            Mode::Test => "TEST_",
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from_env_value(Some(s)))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Production => write!(f, "production"),
            Mode::Develop => write!(f, "develop"),
            Mode::Test => write!(f, "test"),
        }
    }
}

/// Prefix and settings file selected for the process at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentProfile {
    pub mode: Mode,
    pub mode_prefix: &'static str,
    pub settings_path: PathBuf,
}

/// An empty directory stands for the filesystem root, so the settings
/// path is never relative to the working directory.
fn settings_path_in(dir: &Path) -> PathBuf {
    if dir.as_os_str().is_empty() {
        Path::new("/").join(SETTINGS_FILE_NAME)
    } else {
        dir.join(SETTINGS_FILE_NAME)
    }
}

impl EnvironmentProfile {
    pub fn resolve(mode: Mode, home: impl AsRef<Path>) -> Self {
        Self::resolve_with_root(mode, DEFAULT_APP_ROOT, home)
    }

    pub fn resolve_with_root(
        mode: Mode,
        app_root: impl AsRef<Path>,
        home: impl AsRef<Path>,
    ) -> Self {
        let base = match mode {
            Mode::Production | Mode::Develop => app_root.as_ref(),
            Mode::Test => home.as_ref(),
        };

        EnvironmentProfile {
            mode,
            mode_prefix: mode.prefix(),
            settings_path: settings_path_in(base),
        }
    }

    /// Composes the mode prefix with a variable base name.
    pub fn prefixed_key(&self, base_name: &str) -> String {
        format!("{}{}", self.mode_prefix, base_name)
    }

    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }

    pub fn is_develop(&self) -> bool {
        self.mode == Mode::Develop
    }
}
