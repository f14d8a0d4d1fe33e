// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - PUIENV
//
//! Explicit configuration object
//! Built once at startup and passed by reference to every consumer.

use std::collections::HashMap;

use super::types::EnvironmentProfile;

/// Snapshot of settings file entries overlaid by process variables.
#[derive(Debug, Clone)]
pub struct Settings {
    profile: EnvironmentProfile,
    values: HashMap<String, String>,
}

impl Settings {
    /// Process variables win over file entries with the same key.
    pub fn from_parts<F, P>(profile: EnvironmentProfile, file_entries: F, process_vars: P) -> Self
    where
        F: IntoIterator<Item = (String, String)>,
        P: IntoIterator<Item = (String, String)>,
    {
        let mut values: HashMap<String, String> = file_entries.into_iter().collect();
        values.extend(process_vars);
        Settings { profile, values }
    }

    pub fn profile(&self) -> &EnvironmentProfile {
        &self.profile
    }

    pub fn prefix(&self) -> &'static str {
        self.profile.mode_prefix
    }

    /// Looks up `<prefix><base_name>`.
    pub fn get(&self, base_name: &str) -> Option<&str> {
        self.get_raw(&self.profile.prefixed_key(base_name))
    }

    pub fn get_or(&self, base_name: &str, default: &str) -> String {
        self.get(base_name).unwrap_or(default).to_string()
    }

    /// Looks up a key exactly as given, without the mode prefix.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
