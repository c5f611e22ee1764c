// ABOUTME: Per-environment deployment settings.
// ABOUTME: Platform tag, domain, injected variables, and build commands.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::EnvValue;

/// Display label that selects the production publish flag.
pub const PRODUCTION_LABEL: &str = "Production";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentSpec {
    #[serde(default)]
    pub name: Option<String>,

    /// Raw platform tag. Unrecognized tags are rejected when publishing, not here.
    #[serde(rename = "type", default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub environment_variables: BTreeMap<String, EnvValue>,

    #[serde(default)]
    pub build_settings: BuildSettings,
}

impl EnvironmentSpec {
    pub fn platform_label(&self) -> &str {
        match self.platform.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p,
            _ => "unknown",
        }
    }

    /// Domain, if one is configured and non-blank.
    pub fn domain(&self) -> Option<&str> {
        self.domain
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    pub fn is_production(&self) -> bool {
        self.name.as_deref() == Some(PRODUCTION_LABEL)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub build_command: String,
    pub dev_command: String,
    pub port: u16,
    pub publish_command: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            build_command: "npm run build".to_string(),
            dev_command: "npm run dev".to_string(),
            port: 3000,
            publish_command: "vercel".to_string(),
        }
    }
}

impl BuildSettings {
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Named environments in document order. Names are unique.
#[derive(Debug, Clone, Default)]
pub struct Environments(Vec<(String, EnvironmentSpec)>);

impl Environments {
    pub(crate) fn from_entries(entries: Vec<(String, EnvironmentSpec)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<&EnvironmentSpec> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, spec)| spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvironmentSpec)> {
        self.0.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or replace an environment, keeping the original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, spec: EnvironmentSpec) {
        let name = name.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = spec,
            None => self.0.push((name, spec)),
        }
    }
}
