// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Reads the servers mapping in document order and rejects duplicate names.

use serde::de::{self, MapAccess, Visitor};
use std::fmt;

use super::{EnvironmentSpec, Environments};

pub fn deserialize_environments<'de, D>(deserializer: D) -> Result<Environments, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(EnvironmentsVisitor)
}

struct EnvironmentsVisitor;

impl<'de> Visitor<'de> for EnvironmentsVisitor {
    type Value = Environments;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of environment names to settings")
    }

    // `servers:` with no value
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Environments::default())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Environments::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, EnvironmentSpec)> =
            Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((name, spec)) = map.next_entry::<String, EnvironmentSpec>()? {
            if entries.iter().any(|(existing, _)| *existing == name) {
                return Err(de::Error::custom(format!(
                    "duplicate environment name: {name}"
                )));
            }
            entries.push((name, spec));
        }

        Ok(Environments::from_entries(entries))
    }
}
