pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DimensionPolicyConfigItem, FileLoggingConfigItem, PathConfigItem,
    PrefixConfigItem, TokenOverrides, TokenOverridesConfigItem,
};
use crate::core::types::{DimensionPolicy, LevelPrefix};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    InputPath,
    OutputDir,
    LevelPrefix,
    DimensionPolicy,
    FileLoggingEnabled,
    TokenOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "PathConfigItem::input_default")]
    pub input_path: PathConfigItem,
    #[serde(default = "PathConfigItem::output_default")]
    pub output_dir: PathConfigItem,
    #[serde(default)]
    pub level_prefix: PrefixConfigItem,
    #[serde(default)]
    pub dimension_policy: DimensionPolicyConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub token_overrides: TokenOverridesConfigItem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            input_path: PathConfigItem::input_default(),
            output_dir: PathConfigItem::output_default(),
            level_prefix: PrefixConfigItem::default(),
            dimension_policy: DimensionPolicyConfigItem::default(),
            file_logging_enabled: FileLoggingConfigItem::default(),
            token_overrides: TokenOverridesConfigItem::default(),
        }
    }
}

/// Run settings: built-in defaults, optionally a JSON file, then CLI overrides.
#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// File the settings came from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn input_path(&self) -> &Path {
        self.data.input_path.get_value()
    }
    pub fn output_dir(&self) -> &Path {
        self.data.output_dir.get_value()
    }
    pub fn level_prefix(&self) -> &LevelPrefix {
        self.data.level_prefix.get_value()
    }
    pub fn dimension_policy(&self) -> DimensionPolicy {
        *self.data.dimension_policy.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }
    pub fn token_overrides(&self) -> &TokenOverrides {
        self.data.token_overrides.get_value()
    }

    fn value_string(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::InputPath => self.input_path().display().to_string(),
            ConfigKey::OutputDir => self.output_dir().display().to_string(),
            ConfigKey::LevelPrefix => self.level_prefix().to_string(),
            ConfigKey::DimensionPolicy => self.dimension_policy().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
            ConfigKey::TokenOverrides => self.token_overrides().to_string(),
        }
    }

    fn description(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::InputPath => self.data.input_path.description(),
            ConfigKey::OutputDir => self.data.output_dir.description(),
            ConfigKey::LevelPrefix => self.data.level_prefix.description(),
            ConfigKey::DimensionPolicy => self.data.dimension_policy.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
            ConfigKey::TokenOverrides => self.data.token_overrides.description(),
        }
    }

    /// `(key, description, value)` for every setting, in key order.
    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    let description = match key {
                        ConfigKey::DimensionPolicy => format!(
                            "{} {}",
                            self.description(key),
                            self.dimension_policy().help()
                        ),
                        _ => self.description(key).to_string(),
                    };
                    (key.to_string(), description, self.value_string(key))
                })
                .collect(),
        )
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        match key {
            ConfigKey::InputPath => self.data.input_path.set_value(new_value),
            ConfigKey::OutputDir => self.data.output_dir.set_value(new_value),
            ConfigKey::LevelPrefix => self.data.level_prefix.set_value(new_value),
            ConfigKey::DimensionPolicy => self.data.dimension_policy.set_value(new_value),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.set_value(new_value),
            ConfigKey::TokenOverrides => self.data.token_overrides.set_value(new_value),
        }
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Config(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    /// Applies every override or none: on error the config is left unchanged.
    pub fn set_many<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut staged = self.clone();
        for (k, v) in pairs {
            staged.set(k.as_ref(), v.as_ref())?;
        }
        *self = staged;
        Ok(())
    }
}
