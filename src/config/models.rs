use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::core::types::{Bool, DimensionPolicy, LevelPrefix};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfigItem {
    pub value: PathBuf,
    pub description: String,
}

impl PathConfigItem {
    fn new(value: &str, description: &str) -> Self {
        Self {
            value: PathBuf::from(value),
            description: description.into(),
        }
    }

    pub fn input_default() -> Self {
        Self::new("levels_data.cpp", "Source file holding the level tables.")
    }

    pub fn output_default() -> Self {
        Self::new("export", "Directory receiving one <level>.txt per table.")
    }
}

impl ConfigItem<PathBuf> for PathConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() {
            return Err(Error::Config("Path must not be empty.".into()));
        }
        self.value = PathBuf::from(trimmed);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixConfigItem {
    pub value: LevelPrefix,
    pub description: String,
}

impl Default for PrefixConfigItem {
    fn default() -> Self {
        Self {
            value: LevelPrefix::default(),
            description: "Name prefix of level tables (followed by digits).".into(),
        }
    }
}

impl ConfigItem<LevelPrefix> for PrefixConfigItem {
    fn get_value(&self) -> &LevelPrefix {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = LevelPrefix::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionPolicyConfigItem {
    pub value: DimensionPolicy,
    pub description: String,
}

impl Default for DimensionPolicyConfigItem {
    fn default() -> Self {
        Self {
            value: DimensionPolicy::default(),
            description: "Handling of tables whose token count does not fill the inferred grid."
                .into(),
        }
    }
}

impl ConfigItem<DimensionPolicy> for DimensionPolicyConfigItem {
    fn get_value(&self) -> &DimensionPolicy {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = DimensionPolicy::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Also write log messages to a session file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Extra `SOURCE=EDITOR` dictionary entries. Written on the command line as
/// `A=B, C=D`; stored in JSON as an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenOverrides(pub BTreeMap<String, String>);

impl TokenOverrides {
    pub fn try_from_str(s: &str) -> Result<Self, Error> {
        let mut map = BTreeMap::new();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (from, to) = pair
                .split_once('=')
                .map(|(from, to)| (from.trim(), to.trim()))
                .filter(|(from, to)| !from.is_empty() && !to.is_empty())
                .ok_or_else(|| {
                    Error::Config(format!(
                        "Invalid token override: '{pair}'. Expected SOURCE=EDITOR."
                    ))
                })?;
            map.insert(from.to_string(), to.to_string());
        }
        Ok(Self(map))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TokenOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }
        let pairs: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        f.write_str(&pairs.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenOverridesConfigItem {
    pub value: TokenOverrides,
    pub description: String,
}

impl Default for TokenOverridesConfigItem {
    fn default() -> Self {
        Self {
            value: TokenOverrides::default(),
            description: "Dictionary entries added to or replacing the built-in table.".into(),
        }
    }
}

impl ConfigItem<TokenOverrides> for TokenOverridesConfigItem {
    fn get_value(&self) -> &TokenOverrides {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = TokenOverrides::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
