use std::path::PathBuf;

use crate::config::ConfigKey;
use crate::errors::{Error, Result};

pub const USAGE: &str = "\
Usage: level-extractor [OPTIONS]

Converts the level tables of a C source file into level editor grids.

Options:
  --config <file>             Load settings from a JSON config file
  --input <file>              Source file holding the level tables
  --output <dir>              Directory receiving <level>.txt files
  --prefix <name>             Name prefix of level tables (default: level)
  --dimension-policy <policy> permissive, warn or strict
  --logs <dir>                Also log to a session file in <dir>
  --show-config               Print the effective settings and exit
  -h, --help                  Print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    /// Applied on top of the config file, in command-line order.
    pub overrides: Vec<(ConfigKey, String)>,
    pub logs_dir: PathBuf,
    pub show_config: bool,
    pub show_help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config_path: None,
            overrides: Vec::new(),
            logs_dir: PathBuf::from("logs"),
            show_config: false,
            show_help: false,
        }
    }
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Some(PathBuf::from(Self::next_value(&mut args, &arg)?));
                }
                "--input" => parsed.push_override(ConfigKey::InputPath, &mut args, &arg)?,
                "--output" => parsed.push_override(ConfigKey::OutputDir, &mut args, &arg)?,
                "--prefix" => parsed.push_override(ConfigKey::LevelPrefix, &mut args, &arg)?,
                "--dimension-policy" => {
                    parsed.push_override(ConfigKey::DimensionPolicy, &mut args, &arg)?
                }
                "--logs" => {
                    parsed.logs_dir = PathBuf::from(Self::next_value(&mut args, &arg)?);
                    parsed
                        .overrides
                        .push((ConfigKey::FileLoggingEnabled, "True".to_string()));
                }
                "--show-config" => parsed.show_config = true,
                "-h" | "--help" => parsed.show_help = true,
                _ => return Err(Error::usage(format!("Unknown argument: {arg}"))),
            }
        }
        Ok(parsed)
    }

    fn push_override<I>(&mut self, key: ConfigKey, args: &mut I, flag: &str) -> Result<()>
    where
        I: Iterator<Item = String>,
    {
        let value = Self::next_value(args, flag)?;
        self.overrides.push((key, value));
        Ok(())
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .filter(|value| !value.starts_with("--"))
            .ok_or_else(|| Error::usage(format!("Missing value for {flag}")))
    }
}
