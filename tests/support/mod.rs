// ABOUTME: Test support utilities.
// ABOUTME: Recording command executor, stub health probe, and project fixtures.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::fs;
use std::sync::Once;
use tempfile::TempDir;
use webship::health::{HealthProbe, ProbeResult};
use webship::shell::{CommandExecutor, CommandOutput, ForegroundExit, ShellCommand};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("webship=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Executor that records every command instead of running it.
///
/// Commands listed as failing exit with code 1; everything else succeeds.
pub struct RecordingExecutor {
    calls: Mutex<Vec<ShellCommand>>,
    failing: Vec<String>,
    foreground_exit: ForegroundExit,
}

#[allow(dead_code)]
impl RecordingExecutor {
    pub fn new() -> Self {
        Self::failing(&[])
    }

    pub fn failing(commands: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: commands.iter().map(|c| c.to_string()).collect(),
            foreground_exit: ForegroundExit::Interrupted,
        }
    }

    pub fn with_foreground_exit(mut self, exit: ForegroundExit) -> Self {
        self.foreground_exit = exit;
        self
    }

    pub fn calls(&self) -> Vec<ShellCommand> {
        self.calls.lock().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.command.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn run(&self, command: &ShellCommand) -> CommandOutput {
        self.calls.lock().push(command.clone());

        if self.failing.contains(&command.command) {
            CommandOutput {
                success: false,
                exit_code: Some(1),
                stdout: String::new(),
                stderr: format!("{} failed", command.command),
            }
        } else {
            CommandOutput {
                success: true,
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }
        }
    }

    async fn run_foreground(&self, command: &ShellCommand) -> ForegroundExit {
        self.calls.lock().push(command.clone());
        self.foreground_exit.clone()
    }
}

/// Probe that returns a fixed result and records the URLs it was asked about.
pub struct StubProbe {
    result: ProbeResult,
    urls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubProbe {
    pub fn new(result: ProbeResult) -> Self {
        Self {
            result,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn healthy() -> Self {
        Self::new(ProbeResult::Healthy { status: 200 })
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

#[async_trait]
impl HealthProbe for StubProbe {
    async fn check(&self, url: &str) -> ProbeResult {
        self.urls.lock().push(url.to_string());
        self.result.clone()
    }
}

/// Temporary project directory containing `files` (relative paths).
#[allow(dead_code)]
pub fn project_with_files(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        let path = dir.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
    }
    dir
}
