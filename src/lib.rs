//! MatrixHub deploy CLI.
//!
//! This crate provides the `matrixhub` command-line tool for deploying and
//! managing a self-hosted MatrixHub instance as a single named Docker
//! container. Each invocation runs one lifecycle pipeline: query the
//! container's current state, then perform at most a short ordered sequence
//! of mutations, and exit.
//!
//! # Architecture
//!
//! The Docker daemon is the sole authority on container state. The crate
//! never caches or persists anything; every query shells out afresh, and
//! state preconditions are checked by the command flows immediately before
//! each mutation.
//!
//! # Modules
//!
//! - [`cli`] - Command definitions, per-command flows, and terminal output
//! - [`runtime`] - The container runtime port and its Docker CLI adapter
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use matrixhub::runtime::docker::DockerCli;
//! use matrixhub::runtime::ContainerRuntime;
//!
//! # async fn demo() {
//! let runtime = DockerCli::new();
//! if runtime.container_running("matrixhub").await {
//!     println!("already up");
//! }
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod runtime;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use error::{Error, Result};
