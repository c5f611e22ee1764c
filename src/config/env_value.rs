// ABOUTME: Environment variable value types with interpolation support.
// ABOUTME: Handles literal values and references to the operator's environment.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEnvValue")]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        var: String,
        default: Option<String>,
    },
}

impl EnvValue {
    pub fn resolve(&self) -> Result<String> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => Ok(val),
                Err(_) => default
                    .clone()
                    .ok_or_else(|| Error::MissingEnvVar(var.clone())),
            },
        }
    }
}

/// YAML scalars other than strings are accepted and kept as their text form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnvValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    FromEnv {
        env: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl From<RawEnvValue> for EnvValue {
    fn from(raw: RawEnvValue) -> Self {
        match raw {
            RawEnvValue::Text(s) => EnvValue::Literal(s),
            RawEnvValue::Integer(n) => EnvValue::Literal(n.to_string()),
            RawEnvValue::Float(n) => EnvValue::Literal(n.to_string()),
            RawEnvValue::Flag(b) => EnvValue::Literal(b.to_string()),
            RawEnvValue::FromEnv { env, default } => EnvValue::FromEnv { var: env, default },
        }
    }
}

pub fn resolve_env_map(map: &BTreeMap<String, EnvValue>) -> Result<HashMap<String, String>> {
    map.iter()
        .map(|(k, v)| v.resolve().map(|resolved| (k.clone(), resolved)))
        .collect()
}
