// ABOUTME: Entry point for the webship CLI application.
// ABOUTME: Parses arguments, loads the configuration, and dispatches to list or deploy.

mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use cli::{Cli, LIST_TARGET};
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use webship::config::Config;
use webship::error::Result;
use webship::output::Output;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let Some(target) = cli.target.as_deref() else {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    };

    let mut output = Output::new(cli.output_mode());

    let code = match run(&cli, target, &mut output).await {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            output.error(&e.to_string());
            1
        }
    };

    std::process::exit(code);
}

async fn run(cli: &Cli, target: &str, output: &mut Output) -> Result<bool> {
    let (config, project_dir) = load_config(cli.config.as_deref())?;

    if target == LIST_TARGET {
        commands::list(&config, output);
        return Ok(true);
    }

    commands::deploy(&config, &project_dir, target, output).await
}

/// Load the configuration and pick the directory commands run in.
fn load_config(path: Option<&Path>) -> Result<(Config, PathBuf)> {
    let cwd = env::current_dir()?;

    match path {
        Some(path) => {
            let config = Config::load(path)?;
            let project_dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
                _ => cwd,
            };
            Ok((config, project_dir))
        }
        None => Ok((Config::discover(&cwd)?, cwd)),
    }
}
