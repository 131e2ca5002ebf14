//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! The centerpiece is [`FakeRuntime`], an in-memory stand-in for the Docker
//! CLI that simulates a tiny container registry and records every mutation,
//! so command flows can be exercised without a daemon.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, RuntimeError};
use crate::runtime::{ContainerRuntime, RunConfig, STATUS_NOT_FOUND};

#[derive(Debug, Clone)]
struct FakeContainer {
    running: bool,
    status: String,
}

#[derive(Debug, Default)]
struct FakeState {
    containers: HashMap<String, FakeContainer>,
    mutations: Vec<String>,
    failures: HashMap<&'static str, String>,
}

/// In-memory container runtime with scripted failures and a mutation log.
///
/// Queries answer from the simulated registry; mutations update it the way
/// the real daemon would (create registers a running container, stop parks
/// it, remove deletes it). Individual operations can be made to fail via
/// [`FakeRuntime::failing`].
pub struct FakeRuntime {
    installed: bool,
    state: Mutex<FakeState>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self {
            installed: true,
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Simulate a host with no docker binary.
    pub fn without_docker(mut self) -> Self {
        self.installed = false;
        self
    }

    /// Pre-register a container, running or stopped.
    pub fn with_container(self, name: &str, running: bool) -> Self {
        let status = if running {
            "Up 2 hours".to_string()
        } else {
            "Exited (0) 3 hours ago".to_string()
        };
        self.state
            .lock()
            .unwrap()
            .containers
            .insert(name.to_string(), FakeContainer { running, status });
        self
    }

    /// Make one operation (`"pull"`, `"create"`, `"stop"`, `"remove"`,
    /// `"restart"`, `"logs"`) fail with the given message.
    pub fn failing(self, operation: &'static str, message: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(operation, message.to_string());
        self
    }

    /// Mutations issued so far, in order, rendered as `"op target"`.
    pub fn mutations(&self) -> Vec<String> {
        self.state.lock().unwrap().mutations.clone()
    }

    fn check(&self, operation: &'static str, target: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = state.failures.get(operation) {
            return Err(RuntimeError::Invocation {
                command: operation.to_string(),
                message: message.clone(),
            }
            .into());
        }
        state.mutations.push(format!("{operation} {target}"));
        Ok(())
    }
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn installed(&self) -> bool {
        self.installed
    }

    async fn container_exists(&self, name: &str) -> bool {
        self.state.lock().unwrap().containers.contains_key(name)
    }

    async fn container_running(&self, name: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .containers
            .get(name)
            .map(|container| container.running)
            .unwrap_or(false)
    }

    async fn container_status(&self, name: &str) -> String {
        self.state
            .lock()
            .unwrap()
            .containers
            .get(name)
            .map(|container| container.status.clone())
            .unwrap_or_else(|| STATUS_NOT_FOUND.to_string())
    }

    async fn create_container(&self, config: &RunConfig) -> Result<()> {
        self.check("create", &config.name)?;
        let mut state = self.state.lock().unwrap();
        if state.containers.contains_key(&config.name) {
            return Err(RuntimeError::Invocation {
                command: "run".to_string(),
                message: format!("container name \"{}\" is already in use", config.name),
            }
            .into());
        }
        state.containers.insert(
            config.name.clone(),
            FakeContainer {
                running: true,
                status: "Up Less than a second".to_string(),
            },
        );
        Ok(())
    }

    async fn stop_container(&self, name: &str) -> Result<()> {
        self.check("stop", name)?;
        let mut state = self.state.lock().unwrap();
        match state.containers.get_mut(name) {
            Some(container) => {
                container.running = false;
                container.status = "Exited (0) Less than a second ago".to_string();
                Ok(())
            }
            None => Err(no_such_container("stop", name)),
        }
    }

    async fn remove_container(&self, name: &str) -> Result<()> {
        self.check("remove", name)?;
        let mut state = self.state.lock().unwrap();
        match state.containers.remove(name) {
            Some(_) => Ok(()),
            None => Err(no_such_container("rm", name)),
        }
    }

    async fn restart_container(&self, name: &str) -> Result<()> {
        self.check("restart", name)?;
        let mut state = self.state.lock().unwrap();
        match state.containers.get_mut(name) {
            Some(container) => {
                container.running = true;
                container.status = "Up Less than a second".to_string();
                Ok(())
            }
            None => Err(no_such_container("restart", name)),
        }
    }

    async fn pull_image(&self, image: &str) -> Result<()> {
        self.check("pull", image)
    }

    async fn stream_logs(&self, name: &str, follow: bool, tail: u32) -> Result<()> {
        self.check("logs", &format!("{name} follow={follow} tail={tail}"))
    }
}

fn no_such_container(command: &str, name: &str) -> crate::error::Error {
    RuntimeError::Invocation {
        command: command.to_string(),
        message: format!("No such container: {name}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(name: &str) -> RunConfig {
        RunConfig {
            name: name.to_string(),
            image: "ghcr.io/matrixhub-ai/matrixhub:main".to_string(),
            port: 9527,
            data_dir: PathBuf::from("/tmp/data"),
            detach: true,
        }
    }

    #[tokio::test]
    async fn unknown_names_report_absent_and_not_found() {
        let runtime = FakeRuntime::new();
        assert!(!runtime.container_exists("nope").await);
        assert!(!runtime.container_running("nope").await);
        assert_eq!(runtime.container_status("nope").await, STATUS_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_registers_a_running_container() {
        let runtime = FakeRuntime::new();
        runtime.create_container(&config("hub")).await.unwrap();
        assert!(runtime.container_exists("hub").await);
        assert!(runtime.container_running("hub").await);
    }

    #[tokio::test]
    async fn stop_then_remove_reaches_absent() {
        let runtime = FakeRuntime::new().with_container("hub", true);
        runtime.stop_container("hub").await.unwrap();
        assert!(!runtime.container_running("hub").await);
        assert!(runtime.container_exists("hub").await);

        runtime.remove_container("hub").await.unwrap();
        assert!(!runtime.container_exists("hub").await);
    }

    #[tokio::test]
    async fn scripted_failure_surfaces_as_invocation_error() {
        let runtime = FakeRuntime::new().failing("pull", "registry unreachable");
        let err = runtime.pull_image("some:image").await.unwrap_err();
        assert!(err.to_string().contains("registry unreachable"));
        assert!(runtime.mutations().is_empty());
    }
}
