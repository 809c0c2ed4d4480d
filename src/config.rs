use crate::domain::{CanonicalSource, Rule, RuleSet};
use crate::error::{Result, VersionSyncError};
use crate::registry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up under the project root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "versionsync.toml";

/// Represents the complete configuration for version-sync.
///
/// Names the canonical source and the ordered rule list.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub canonical: CanonicalSource,

    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canonical: registry::canonical_source(),
            rules: registry::builtin_rules().iter().cloned().collect(),
        }
    }
}

impl Config {
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::new(self.rules.clone())
    }

    /// Parse a configuration document and reject rule sets that cannot run.
    pub fn from_toml(source: &str) -> Result<Config> {
        let config: Config = toml::from_str(source)
            .map_err(|e| VersionSyncError::config(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(VersionSyncError::config("configuration defines no rules"));
        }
        self.rule_set().validate()
    }
}

/// Loads configuration from file or returns the built-in registry.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `versionsync.toml` under `root`
/// 3. Built-in rule table if no file found
///
/// # Arguments
/// * `root` - Project root the rules are relative to
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| VersionSyncError::io(path, e))?
    } else {
        let default_path = root.join(CONFIG_FILE_NAME);
        if default_path.exists() {
            fs::read_to_string(&default_path).map_err(|e| VersionSyncError::io(&default_path, e))?
        } else {
            return Ok(Config::default());
        }
    };

    Config::from_toml(&config_str)
}
