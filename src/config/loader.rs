// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - PUIENV
//! Profile resolution and settings file loading

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::ConfigError;
use super::settings::Settings;
use super::types::*;

impl EnvironmentProfile {
    /// Resolves the profile from `NODE_ENV`, `HOME` and `PUIENV_APP_ROOT`.
    pub fn from_process() -> Self {
        let mode = Mode::from_env_value(env::var(MODE_VAR).ok().as_deref());
        let home = home_dir_from(env::var_os(HOME_VAR));
        let app_root = env::var_os(APP_ROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_ROOT));

        let profile = Self::resolve_with_root(mode, app_root, home);
        debug!(
            mode = %profile.mode,
            prefix = profile.mode_prefix,
            path = %profile.settings_path.display(),
            "Resolved environment profile"
        );
        profile
    }

    /// Hands the settings file to dotenvy, which fills the process
    /// environment without overriding variables that are already set.
    /// The outcome is logged and otherwise ignored.
    pub fn load_into_process(&self) -> &'static str {
        if let Err(e) = dotenvy::from_path(&self.settings_path) {
            if e.not_found() {
                info!(
                    "No settings file at {}, using environment variables only",
                    self.settings_path.display()
                );
            } else {
                warn!(
                    "Error loading settings file {}: {}",
                    self.settings_path.display(),
                    e
                );
            }
        }
        self.mode_prefix
    }
}

impl Settings {
    /// Builds the settings snapshot for `profile`. A missing file is not an
    /// error; a malformed one is logged and its entries before the bad line
    /// are kept.
    pub fn load(profile: EnvironmentProfile) -> Self {
        let (entries, error) = read_settings_file(&profile.settings_path);
        if let Some(e) = error {
            warn!("{}", e);
        }
        Settings::from_parts(profile, entries, process_vars())
    }

    /// Like [`Settings::load`], but a settings file that exists and cannot
    /// be read or parsed is returned as an error.
    pub fn try_load(profile: EnvironmentProfile) -> Result<Self, ConfigError> {
        let (entries, error) = read_settings_file(&profile.settings_path);
        if let Some(e) = error {
            return Err(e);
        }
        Ok(Settings::from_parts(profile, entries, process_vars()))
    }
}

/// One-shot startup: resolve the profile from the process and load it.
pub fn bootstrap() -> Settings {
    Settings::load(EnvironmentProfile::from_process())
}

/// An unset or empty `HOME` falls back to the platform home directory.
fn home_dir_from(value: Option<OsString>) -> PathBuf {
    value
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn read_settings_file(path: &Path) -> (Vec<(String, String)>, Option<ConfigError>) {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            info!(
                "No settings file at {}, using environment variables only",
                path.display()
            );
            return (Vec::new(), None);
        }
        Err(e) => return (Vec::new(), Some(into_config_error(path, e))),
    };

    let mut entries = Vec::new();
    for item in iter {
        match item {
            Ok(pair) => entries.push(pair),
            Err(e) => return (entries, Some(into_config_error(path, e))),
        }
    }
    (entries, None)
}

fn into_config_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    match err {
        dotenvy::Error::Io(source) => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => ConfigError::Parse {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

fn process_vars() -> impl Iterator<Item = (String, String)> {
    env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, body: &str) {
        let mut file = std::fs::File::create(dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let (entries, error) = read_settings_file(&dir.path().join(SETTINGS_FILE_NAME));
        assert!(entries.is_empty());
        assert!(error.is_none());
    }

    #[test]
    fn test_read_entries() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "# comment\nPUIENV_T_A=1\nPUIENV_T_B=\"two words\"\n");
        let (entries, error) = read_settings_file(&dir.path().join(SETTINGS_FILE_NAME));
        assert!(error.is_none());
        assert_eq!(
            entries,
            vec![
                ("PUIENV_T_A".to_string(), "1".to_string()),
                ("PUIENV_T_B".to_string(), "two words".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_malformed_keeps_leading_entries() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "PUIENV_T_OK=yes\nthis is not a pair\n");
        let (entries, error) = read_settings_file(&dir.path().join(SETTINGS_FILE_NAME));
        assert_eq!(entries, vec![("PUIENV_T_OK".to_string(), "yes".to_string())]);
        assert!(matches!(error, Some(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_uses_profile_path() {
        let home = TempDir::new().unwrap();
        write_settings(&home, "PUIENV_T_LOAD_KEY=from-file\n");
        let profile =
            EnvironmentProfile::resolve_with_root(Mode::Test, "/nonexistent", home.path());

        let settings = Settings::load(profile);
        assert_eq!(settings.get("PUIENV_T_LOAD_KEY"), None);
        assert_eq!(settings.get_raw("PUIENV_T_LOAD_KEY"), Some("from-file"));
    }

    #[test]
    fn test_load_prefixed_lookup() {
        let home = TempDir::new().unwrap();
        write_settings(&home, "TEST_PUIENV_T_DB_URL=postgres://test\n");
        let profile = EnvironmentProfile::resolve(Mode::Test, home.path());

        let settings = Settings::load(profile);
        assert_eq!(settings.get("PUIENV_T_DB_URL"), Some("postgres://test"));
    }

    #[test]
    fn test_load_missing_file_is_not_an_error() {
        let home = TempDir::new().unwrap();
        let profile = EnvironmentProfile::resolve(Mode::Test, home.path());
        assert!(Settings::try_load(profile.clone()).is_ok());
        assert_eq!(Settings::load(profile).get("PUIENV_T_ABSENT"), None);
    }

    #[test]
    fn test_try_load_rejects_malformed_file() {
        let home = TempDir::new().unwrap();
        write_settings(&home, "not a valid line\n");
        let profile = EnvironmentProfile::resolve(Mode::Test, home.path());

        let err = Settings::try_load(profile).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(SETTINGS_FILE_NAME));
    }

    #[test]
    fn test_load_into_process_returns_prefix() {
        let root = TempDir::new().unwrap();
        let profile = EnvironmentProfile::resolve_with_root(Mode::Develop, root.path(), "/unused");
        assert_eq!(profile.load_into_process(), "DEV_");
    }

    #[test]
    fn test_load_into_process_reads_profile_path() {
        let home = TempDir::new().unwrap();
        write_settings(&home, "PUIENV_T_PROC_KEY=v1\n");
        let profile = EnvironmentProfile::resolve(Mode::Test, home.path());

        assert_eq!(profile.load_into_process(), "TEST_");
        assert_eq!(env::var("PUIENV_T_PROC_KEY").as_deref(), Ok("v1"));
    }

    #[test]
    fn test_home_dir_from_value() {
        assert_eq!(
            home_dir_from(Some(OsString::from("/home/ci"))),
            Path::new("/home/ci")
        );
    }

    #[test]
    fn test_home_dir_ignores_empty_value() {
        let fallback = home_dir_from(None);
        assert_eq!(home_dir_from(Some(OsString::new())), fallback);
        assert!(!fallback.as_os_str().is_empty());
    }

    #[test]
    fn test_from_process_is_stable() {
        assert_eq!(
            EnvironmentProfile::from_process(),
            EnvironmentProfile::from_process()
        );
    }
}
