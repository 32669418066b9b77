//! wastecast.toml configuration parser.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::dataset::DatasetSource;
use crate::error::{CoreError, CoreResult};

pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// CSV or JSON file with historical records. Unset means the builtin table.
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    pub fn dataset_source(&self) -> CoreResult<DatasetSource> {
        match &self.dataset.path {
            Some(path) => DatasetSource::from_path(path),
            None => Ok(DatasetSource::Builtin),
        }
    }
}

impl FromStr for Config {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| CoreError::Config(e.to_string()))
    }
}
