use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// What to do when a level's token count disagrees with its inferred grid.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DimensionPolicy {
    /// Reshape anyway; the last row may be short or missing.
    #[default]
    Permissive,
    /// Reshape anyway and log a warning.
    Warn,
    /// Refuse to write the level.
    Strict,
}

impl DimensionPolicy {
    pub fn help(&self) -> &'static str {
        match self {
            DimensionPolicy::Permissive => {
                "Write the grid even if token count and inferred size disagree."
            }
            DimensionPolicy::Warn => "Write the grid but warn about the disagreement.",
            DimensionPolicy::Strict => "Abort the run when token count and inferred size disagree.",
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Config(format!(
                "Invalid dimension policy: '{}'. Allowed policies: {}",
                s.trim(),
                valid_csv::<DimensionPolicy>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

/// Boolean that reads and writes as `True` / `False` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Config(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Name prefix shared by every level declaration (`level` in `level12`).
///
/// Must be a C identifier that does not end in a digit, otherwise the
/// numeric suffix could not be told apart from the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPrefix(String);

impl LevelPrefix {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        let ends_in_digit = s.ends_with(|c: char| c.is_ascii_digit());
        if !valid_start || !valid_rest || ends_in_digit {
            return Err(Error::Config(format!(
                "Invalid level prefix: '{s}'. Expected an identifier such as 'level' that does not end in a digit."
            )));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LevelPrefix {
    fn default() -> Self {
        Self("level".to_string())
    }
}

impl fmt::Display for LevelPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LevelPrefix {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LevelPrefix {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<LevelPrefix, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        LevelPrefix::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}
