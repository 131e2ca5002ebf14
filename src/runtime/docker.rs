//! Docker CLI adapter for the container runtime port.
//!
//! Every operation shells out to `docker` with `tokio::process` and blocks
//! until the subprocess exits. The one exception is follow-mode log
//! streaming, which races the child against Ctrl-C and kills it on
//! interrupt.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::signal;
use tracing::debug;

use super::{ContainerRuntime, RunConfig, CONTAINER_PORT, STATUS_NOT_FOUND};
use crate::error::{Result, RuntimeError};

/// Production container runtime backed by the `docker` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerCli;

impl DockerCli {
    pub fn new() -> Self {
        Self
    }

    /// Run a docker subcommand and capture its output.
    async fn capture(
        &self,
        args: &[String],
    ) -> std::result::Result<std::process::Output, RuntimeError> {
        debug!(command = %args.join(" "), "invoking docker");
        Command::new("docker")
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| RuntimeError::Spawn {
                command: command_label(args),
                source,
            })
    }

    /// Run a docker subcommand, mapping non-zero exit to an invocation error.
    async fn run_checked(&self, args: &[String]) -> Result<()> {
        let output = self.capture(args).await?;
        if output.status.success() {
            return Ok(());
        }
        Err(RuntimeError::Invocation {
            command: command_label(args),
            message: failure_message(&output),
        }
        .into())
    }

    /// List container names matching a name filter, or `None` when the
    /// runtime cannot be queried.
    async fn list_names(&self, name: &str, all: bool) -> Option<String> {
        let args = ps_args(name, all, "{{.Names}}");
        let output = self.capture(&args).await.ok()?;
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ContainerRuntime for DockerCli {
    async fn installed(&self) -> bool {
        self.capture(&["--version".to_string()])
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    async fn container_exists(&self, name: &str) -> bool {
        self.list_names(name, true)
            .await
            .is_some_and(|names| names.lines().any(|line| line.trim() == name))
    }

    async fn container_running(&self, name: &str) -> bool {
        self.list_names(name, false)
            .await
            .is_some_and(|names| names.lines().any(|line| line.trim() == name))
    }

    async fn container_status(&self, name: &str) -> String {
        // Name filters are substring matches, so the status column is paired
        // with the name column and matched exactly.
        let args = ps_args(name, true, "{{.Names}}\t{{.Status}}");
        let Ok(output) = self.capture(&args).await else {
            return STATUS_NOT_FOUND.to_string();
        };
        if !output.status.success() {
            return STATUS_NOT_FOUND.to_string();
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .find_map(|line| {
                let (candidate, status) = line.split_once('\t')?;
                (candidate.trim() == name).then(|| status.trim().to_string())
            })
            .unwrap_or_else(|| STATUS_NOT_FOUND.to_string())
    }

    async fn create_container(&self, config: &RunConfig) -> Result<()> {
        self.run_checked(&run_args(config)).await
    }

    async fn stop_container(&self, name: &str) -> Result<()> {
        self.run_checked(&["stop".to_string(), name.to_string()])
            .await
    }

    async fn remove_container(&self, name: &str) -> Result<()> {
        self.run_checked(&["rm".to_string(), name.to_string()]).await
    }

    async fn restart_container(&self, name: &str) -> Result<()> {
        self.run_checked(&["restart".to_string(), name.to_string()])
            .await
    }

    async fn pull_image(&self, image: &str) -> Result<()> {
        self.run_checked(&["pull".to_string(), image.to_string()])
            .await
    }

    async fn stream_logs(&self, name: &str, follow: bool, tail: u32) -> Result<()> {
        let args = logs_args(name, follow, tail);
        debug!(command = %args.join(" "), "invoking docker");

        let mut child = Command::new("docker")
            .args(&args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| RuntimeError::Spawn {
                command: command_label(&args),
                source,
            })?;

        let status = if follow {
            tokio::select! {
                status = child.wait() => status?,
                _ = signal::ctrl_c() => {
                    // Terminate the stream and join the child before exiting.
                    child.kill().await.ok();
                    return Ok(());
                }
            }
        } else {
            child.wait().await?
        };

        if status.success() {
            Ok(())
        } else {
            Err(RuntimeError::Invocation {
                command: command_label(&args),
                message: format!("exited with {status}"),
            }
            .into())
        }
    }
}

/// Build `docker ps` arguments for a name-filtered query.
fn ps_args(name: &str, all: bool, format: &str) -> Vec<String> {
    let mut args = vec!["ps".to_string()];
    if all {
        args.push("-a".to_string());
    }
    args.extend([
        "--filter".to_string(),
        format!("name={name}"),
        "--format".to_string(),
        format.to_string(),
    ]);
    args
}

/// Build `docker run` arguments from a run configuration.
fn run_args(config: &RunConfig) -> Vec<String> {
    let mut args = vec!["run".to_string()];
    if config.detach {
        args.push("-d".to_string());
    }
    args.extend([
        "--name".to_string(),
        config.name.clone(),
        "--restart".to_string(),
        "unless-stopped".to_string(),
        "-p".to_string(),
        format!("{}:{CONTAINER_PORT}", config.port),
        "-v".to_string(),
        format!("{}:/data", config.data_dir.display()),
        config.image.clone(),
    ]);
    args
}

/// Build `docker logs` arguments.
fn logs_args(name: &str, follow: bool, tail: u32) -> Vec<String> {
    let mut args = vec!["logs".to_string()];
    if follow {
        args.push("-f".to_string());
    }
    args.extend(["--tail".to_string(), tail.to_string(), name.to_string()]);
    args
}

/// Subcommand token used in error messages (`docker stop`, `docker pull`).
fn command_label(args: &[String]) -> String {
    args.first().cloned().unwrap_or_default()
}

/// Extract a failure description from a finished command, preferring stderr.
fn failure_message(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}
