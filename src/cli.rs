// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: One positional target (an environment name or `list`) plus output flags.

use clap::Parser;
use std::path::PathBuf;
use webship::output::OutputMode;

/// Target that prints the configured environments instead of deploying.
pub const LIST_TARGET: &str = "list";

#[derive(Parser)]
#[command(name = "webship")]
#[command(about = "Build and publish a web application to a configured environment")]
#[command(version)]
#[command(after_help = "Examples:\n  webship production\n  webship development\n  webship list")]
pub struct Cli {
    /// Environment to deploy, or `list` to show configured environments
    pub target: Option<String>,

    /// Configuration file (default: deployment.yml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}
