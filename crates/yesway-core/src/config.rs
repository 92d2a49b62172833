// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration. Only settings live here; directory records are
// never written to disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Application settings, optionally read from `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub remote: RemoteConfig,
}

/// Behaviour of the directory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Draw a random status for quick-added services (otherwise "Pending").
    pub randomize_quick_add: bool,
    /// Start with the demo clients, services, and orders.
    pub seed_sample_data: bool,
    /// Client name used by the quick "Add Service" button.
    pub quick_add_client: String,
    /// Task used by the quick "Add Service" button.
    pub quick_add_task: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            randomize_quick_add: true,
            seed_sample_data: true,
            quick_add_client: "Demo".into(),
            quick_add_task: "Remote Fix".into(),
        }
    }
}

/// How remote desktop sessions are started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Address every client connection goes to. Per-client addresses are
    /// not tracked yet.
    pub address: String,
    /// Remote desktop client executable.
    pub program: String,
    /// Arguments passed to `program`; `{address}` is substituted.
    pub args: Vec<String>,
    /// When false, connections go to the stub launcher and never spawn.
    pub launch_enabled: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            address: "192.168.1.100".into(),
            program: default_program().into(),
            args: vec!["/v:{address}".into()],
            launch_enabled: true,
        }
    }
}

fn default_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "mstsc"
    } else {
        "xfreerdp"
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Read `path` if it exists, falling back to defaults when it does not.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YeswayError;

    #[test]
    fn defaults_match_the_stock_console() {
        let config = AppConfig::default();
        assert!(config.store.randomize_quick_add);
        assert!(config.store.seed_sample_data);
        assert_eq!(config.store.quick_add_client, "Demo");
        assert_eq!(config.remote.address, "192.168.1.100");
        assert_eq!(config.remote.args, vec!["/v:{address}".to_string()]);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "remote": { "address": "10.0.0.7" }, "store": { "randomize_quick_add": false } }"#,
        )
        .expect("write config");

        let config = AppConfig::load(&path).expect("load");
        assert_eq!(config.remote.address, "10.0.0.7");
        assert!(config.remote.launch_enabled);
        assert!(!config.store.randomize_quick_add);
        assert_eq!(config.store.quick_add_task, "Remote Fix");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_or_default(dir.path().join("absent.json")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write config");

        let err = AppConfig::load_or_default(&path).expect_err("should fail");
        assert!(matches!(err, YeswayError::Serialization(_)));
    }
}
