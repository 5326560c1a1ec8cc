/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub interpreter: InterpreterConfig,
    pub renderer: RendererConfig,
    pub generator: GeneratorConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InterpreterConfig {
    pub command_marker: char,
    pub default_floors: u8,
    pub default_elevators: u8,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    pub kind: RendererKind,
    pub output: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub people: u32,
    pub trips: u32,
    pub delay_max: u32,
    pub max_floor: u8,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    Null,
    #[default]
    Log,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("unknown renderer `{0}` (expected null, log or json)")]
    UnknownRenderer(String),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            command_marker: '!',
            default_floors: 11,
            default_elevators: 1,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            people: 5,
            trips: 5,
            delay_max: 10,
            max_floor: 10,
        }
    }
}

impl FromStr for RendererKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(RendererKind::Null),
            "log" => Ok(RendererKind::Log),
            "json" => Ok(RendererKind::Json),
            other => Err(ConfigError::UnknownRenderer(other.to_string())),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interpreter.default_floors == 0 {
            return Err(ConfigError::NotPositive("interpreter.default_floors"));
        }
        if self.interpreter.default_elevators == 0 {
            return Err(ConfigError::NotPositive("interpreter.default_elevators"));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Loads the configuration. An explicit path must exist; the default path may be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    if !explicit && !path.exists() {
        log::debug!("no {} found, using defaults", path.display());
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&config_str).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// env_logger filter when `RUST_LOG` is unset. Keeps the log renderer audible.
pub const DEFAULT_LOG_FILTER: &str = "warn,display=info";

pub fn parse_config(config_str: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
