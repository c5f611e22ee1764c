// ABOUTME: List command implementation.
// ABOUTME: Prints every configured environment with its type and domain.

use serde::Serialize;
use webship::config::{Config, EnvironmentSpec};
use webship::output::{Output, OutputMode};

#[derive(Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    platform: &'a str,
    domain: Option<&'a str>,
}

/// Print the configured environments in document order.
pub fn list(config: &Config, output: &Output) {
    match output.mode() {
        OutputMode::Json => {
            let entries: Vec<_> = config
                .servers
                .iter()
                .map(|(name, spec)| ListEntry {
                    name,
                    platform: spec.platform_label(),
                    domain: spec.domain(),
                })
                .collect();
            if let Ok(json) = serde_json::to_string(&entries) {
                println!("{json}");
            }
        }
        OutputMode::Normal | OutputMode::Quiet => {
            output.progress("Available environments:");
            for (name, spec) in config.servers.iter() {
                println!("{}", format_entry(name, spec));
            }
        }
    }
}

fn format_entry(name: &str, spec: &EnvironmentSpec) -> String {
    format!(
        "  • {} ({}): {}",
        name,
        spec.platform_label(),
        spec.domain().unwrap_or("No domain")
    )
}
