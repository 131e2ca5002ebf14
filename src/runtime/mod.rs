//! Container runtime port.
//!
//! This module defines the trait for driving the external container runtime
//! that hosts the MatrixHub instance. The Docker daemon owns all container
//! state; nothing here is cached, and every query re-asks the runtime. The
//! trait is the substitution seam for tests, which script a fake runtime
//! instead of shelling out.

pub mod docker;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

/// Port inside the container that MatrixHub listens on.
pub const CONTAINER_PORT: u16 = 9527;

/// Status text reported for containers the runtime cannot find.
pub const STATUS_NOT_FOUND: &str = "Not found";

/// Immutable parameter set for creating a new container instance.
///
/// Built once per invocation from CLI options and consumed by exactly one
/// create call.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Container name to register with the runtime.
    pub name: String,
    /// Image reference to run.
    pub image: String,
    /// Host port mapped to [`CONTAINER_PORT`].
    pub port: u16,
    /// Host directory mounted at `/data` inside the container.
    pub data_dir: PathBuf,
    /// Run the container detached.
    pub detach: bool,
}

/// Operations over one named container, delegated to an external runtime.
///
/// Queries follow a fail-to-false policy: any inability to ask the runtime is
/// reported as "does not exist" / "not running" rather than an error. State
/// preconditions (don't create what exists, don't remove what runs) are the
/// caller's responsibility; the runtime port only reports state and performs
/// the requested mutation. No operation is retried.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Whether the runtime command itself is available on this host.
    async fn installed(&self) -> bool;

    /// Whether a container with this exact name is registered (any state).
    async fn container_exists(&self, name: &str) -> bool;

    /// Whether a container with this exact name is currently running.
    async fn container_running(&self, name: &str) -> bool;

    /// Human-readable status text, or [`STATUS_NOT_FOUND`] when the runtime
    /// cannot be queried or reports nothing for the name.
    async fn container_status(&self, name: &str) -> String;

    /// Create and start a new container from `config`.
    ///
    /// The container is registered with an automatic-restart policy, bound to
    /// the configured host port and data volume. Fails if the name is already
    /// taken, the port is bound, or the image cannot be resolved.
    async fn create_container(&self, config: &RunConfig) -> Result<()>;

    /// Stop a running container.
    async fn stop_container(&self, name: &str) -> Result<()>;

    /// Remove a stopped container's resource.
    async fn remove_container(&self, name: &str) -> Result<()>;

    /// Restart an existing container.
    async fn restart_container(&self, name: &str) -> Result<()>;

    /// Fetch an image by reference. Callers decide whether failure is fatal
    /// (explicit update) or best-effort (opportunistic refresh before start).
    async fn pull_image(&self, image: &str) -> Result<()>;

    /// Stream container log lines to the terminal.
    ///
    /// With `follow` the stream is live and runs until externally interrupted;
    /// otherwise the last `tail` lines are printed and the call returns.
    async fn stream_logs(&self, name: &str, follow: bool, tail: u32) -> Result<()>;
}
