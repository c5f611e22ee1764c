// ABOUTME: Configuration types and parsing for deployment.yml.
// ABOUTME: Handles YAML parsing, discovery, and environment resolution.

mod deserialize;
mod env_value;
mod environment;
mod healthcheck;

pub use env_value::{EnvValue, resolve_env_map};
pub use environment::{BuildSettings, EnvironmentSpec, Environments, PRODUCTION_LABEL};
pub use healthcheck::{DEFAULT_HEALTH_ENDPOINT, HealthcheckConfig, MonitoringConfig};

use crate::error::{Error, Result};
use deserialize::deserialize_environments;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "deployment.yml";
pub const CONFIG_FILENAME_ALT: &str = "deployment.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "deserialize_environments")]
    pub servers: Environments,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub deployment_scripts: DeploymentScripts,

    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub static_files: Vec<PathBuf>,

    /// Set to null to skip the manifest check.
    #[serde(default = "default_build_manifest")]
    pub build_manifest: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            static_files: Vec::new(),
            build_manifest: default_build_manifest(),
        }
    }
}

impl StorageConfig {
    /// Files that must exist before deploying, static files first.
    pub fn required_files(&self) -> impl Iterator<Item = &Path> {
        self.static_files
            .iter()
            .chain(self.build_manifest.iter())
            .map(PathBuf::as_path)
    }
}

fn default_build_manifest() -> Option<PathBuf> {
    Some(PathBuf::from("package.json"))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentScripts {
    #[serde(default)]
    pub pre_deploy: Vec<String>,

    #[serde(default)]
    pub post_deploy: Vec<String>,
}

/// Lookup of an environment name that is not configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("environment '{name}' not found in configuration (available: {})", list_names(.available))]
pub struct UnknownEnvironment {
    pub name: String,
    pub available: Vec<String>,
}

fn list_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|source| Error::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the first config file found in `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [dir.join(CONFIG_FILENAME), dir.join(CONFIG_FILENAME_ALT)];

        for path in &candidates {
            if path.is_file() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.join(CONFIG_FILENAME)))
    }

    pub fn resolve(&self, name: &str) -> std::result::Result<&EnvironmentSpec, UnknownEnvironment> {
        self.servers.get(name).ok_or_else(|| UnknownEnvironment {
            name: name.to_string(),
            available: self.servers.names(),
        })
    }

    pub fn environment_names(&self) -> Vec<String> {
        self.servers.names()
    }
}
