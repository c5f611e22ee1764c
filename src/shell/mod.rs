// ABOUTME: External command execution through the OS shell.
// ABOUTME: Captured one-shot runs and foregrounded interruptible runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// How long a foreground process gets to exit on its own after Ctrl+C.
const INTERRUPT_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// A shell command line plus the context it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub command: String,
    pub envs: HashMap<String, String>,
    pub working_dir: Option<PathBuf>,
}

impl ShellCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            envs: HashMap::new(),
            working_dir: None,
        }
    }

    pub fn envs(mut self, envs: HashMap<String, String>) -> Self {
        self.envs.extend(envs);
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn to_command(&self) -> Command {
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&self.command);
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&self.command);
            cmd
        };

        cmd.envs(&self.envs);
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// Result of running a command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output for a command that could not be started at all.
    pub fn spawn_failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: None,
            stdout: String::new(),
            stderr: reason.into(),
        }
    }

    pub fn from_status(status: ExitStatus, stdout: String, stderr: String) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
            stdout,
            stderr,
        }
    }
}

/// How a foregrounded command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForegroundExit {
    /// The process exited by itself. `None` when killed by a signal.
    Exited(Option<i32>),
    /// The operator pressed Ctrl+C.
    Interrupted,
    /// The shell could not be started.
    SpawnFailed(String),
}

/// Runs external commands for the deployment pipeline.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run to completion, capturing stdout and stderr. Never fails: a command
    /// that cannot be started reports `success = false`.
    async fn run(&self, command: &ShellCommand) -> CommandOutput;

    /// Run with inherited stdio until the process exits or Ctrl+C is pressed.
    async fn run_foreground(&self, command: &ShellCommand) -> ForegroundExit;
}

/// Executor backed by `sh -c` (`cmd /C` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn run(&self, command: &ShellCommand) -> CommandOutput {
        tracing::info!("Running: {}", command.command);

        let output = command
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) => {
                let result = CommandOutput::from_status(
                    output.status,
                    String::from_utf8_lossy(&output.stdout).to_string(),
                    String::from_utf8_lossy(&output.stderr).to_string(),
                );

                if result.success {
                    tracing::info!("Command completed successfully: {}", command.command);
                } else {
                    tracing::warn!(
                        "Command failed with exit code {:?}: {}",
                        result.exit_code,
                        command.command
                    );
                }
                if !result.stdout.is_empty() {
                    tracing::debug!(stdout = %result.stdout.trim_end(), "command output");
                }
                if !result.stderr.is_empty() {
                    tracing::debug!(stderr = %result.stderr.trim_end(), "command output");
                }

                result
            }
            Err(e) => {
                tracing::error!("Failed to execute {}: {}", command.command, e);
                CommandOutput::spawn_failure(e.to_string())
            }
        }
    }

    async fn run_foreground(&self, command: &ShellCommand) -> ForegroundExit {
        tracing::info!("Running in foreground: {}", command.command);

        let mut child = match command.to_command().spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::error!("Failed to execute {}: {}", command.command, e);
                return ForegroundExit::SpawnFailed(e.to_string());
            }
        };

        tokio::select! {
            status = child.wait() => match status {
                Ok(status) => ForegroundExit::Exited(status.code()),
                Err(e) => {
                    tracing::warn!("Failed to wait for {}: {}", command.command, e);
                    ForegroundExit::Exited(None)
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, stopping {}", command.command);
                // The terminal delivers SIGINT to the child as well; give it a moment.
                if tokio::time::timeout(INTERRUPT_GRACE_PERIOD, child.wait())
                    .await
                    .is_err()
                {
                    if let Err(e) = child.kill().await {
                        tracing::warn!("Failed to kill {}: {}", command.command, e);
                    }
                }
                ForegroundExit::Interrupted
            }
        }
    }
}
