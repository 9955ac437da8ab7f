//! Suppression configuration
//!
//! Five independently reloadable settings, each a comma-separated list of
//! literal match values. Raw strings are stored opaque; tokenizing happens
//! per record in `list`, so a reload never validates and never fails.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The five suppression settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    UserName,
    ApplicationName,
    Sqlcode,
    ClientIp,
    DatabaseName,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::UserName,
        Setting::ApplicationName,
        Setting::Sqlcode,
        Setting::ClientIp,
        Setting::DatabaseName,
    ];

    /// Setting name as it appears in config files and `--set` overrides.
    pub fn name(self) -> &'static str {
        match self {
            Setting::UserName => "user_name",
            Setting::ApplicationName => "application_name",
            Setting::Sqlcode => "sqlcode",
            Setting::ClientIp => "client_ip",
            Setting::DatabaseName => "database_name",
        }
    }

    /// What the list elements are, for error messages.
    pub fn expects(self) -> &'static str {
        match self {
            Setting::UserName => "user names",
            Setting::ApplicationName => "application names",
            Setting::Sqlcode => "sqlcodes",
            Setting::ClientIp => "client ip addresses",
            Setting::DatabaseName => "database names",
        }
    }

    /// Look up a setting by its config-file name.
    pub fn from_name(name: &str) -> Option<Setting> {
        Setting::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw values of the five suppression settings.
///
/// Each value is a comma-separated list of literal match values; an empty
/// string disables that matcher entirely. All five default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuppressionConfig {
    /// Suppress records from these users.
    pub user_name: String,
    /// Suppress records from these application names.
    pub application_name: String,
    /// Suppress records carrying these status codes.
    pub sqlcode: String,
    /// Suppress records from these client addresses.
    pub client_ip: String,
    /// Suppress records from these databases.
    pub database_name: String,
}

impl SuppressionConfig {
    /// The raw list configured for one setting.
    pub fn raw_list(&self, setting: Setting) -> &str {
        match setting {
            Setting::UserName => &self.user_name,
            Setting::ApplicationName => &self.application_name,
            Setting::Sqlcode => &self.sqlcode,
            Setting::ClientIp => &self.client_ip,
            Setting::DatabaseName => &self.database_name,
        }
    }

    /// Replace the raw list for one setting.
    pub fn set(&mut self, setting: Setting, raw: impl Into<String>) {
        let raw = raw.into();
        match setting {
            Setting::UserName => self.user_name = raw,
            Setting::ApplicationName => self.application_name = raw,
            Setting::Sqlcode => self.sqlcode = raw,
            Setting::ClientIp => self.client_ip = raw,
            Setting::DatabaseName => self.database_name = raw,
        }
    }

    /// Load a configuration from a TOML file.
    ///
    /// Settings not present in the file keep their empty default. Syntax
    /// errors and unknown keys are reported; list contents are not
    /// validated here (see `list::tokenize_into`).
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Holds the latest committed configuration snapshot.
///
/// Evaluation reads one snapshot for the whole record; the external reload
/// mechanism swaps in a full replacement at a reload boundary. Two
/// consecutive evaluations may legitimately see different snapshots.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Arc<SuppressionConfig>>,
}

impl ConfigStore {
    pub fn new(config: SuppressionConfig) -> Self {
        ConfigStore {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// The latest committed snapshot. Cheap: clones an `Arc`.
    pub fn current(&self) -> Arc<SuppressionConfig> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Commit a full replacement snapshot. Takes effect for the next
    /// evaluation; never observed mid-evaluation.
    pub fn reload(&self, config: SuppressionConfig) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
    }
}
