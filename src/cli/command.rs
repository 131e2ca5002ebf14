//! Command-line interface definitions.
//!
//! Defines the CLI structure for the matrixhub deploy tool using `clap`.
//! Each subcommand drives one container lifecycle pipeline: query the
//! current state, then perform at most a short ordered sequence of
//! mutations against the named container.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default container name.
pub const DEFAULT_CONTAINER_NAME: &str = "matrixhub";

/// Default host port mapped to the instance.
pub const DEFAULT_HOST_PORT: u16 = 9527;

/// Default host data directory.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default image reference.
pub const DEFAULT_IMAGE: &str = "ghcr.io/matrixhub-ai/matrixhub:main";

/// Default number of log lines shown without `--follow`.
pub const DEFAULT_LOG_TAIL: u32 = 100;

/// CLI tool for deploying and managing a self-hosted MatrixHub instance
#[derive(Parser, Debug)]
#[command(name = "matrixhub")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the matrixhub CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the MatrixHub container, creating it if needed
    Start(StartArgs),

    /// Stop the MatrixHub container
    Stop(ContainerArgs),

    /// Restart the MatrixHub container
    Restart(ContainerArgs),

    /// Check MatrixHub container status
    Status(ContainerArgs),

    /// View MatrixHub container logs
    Logs(LogsArgs),

    /// Update MatrixHub to the latest image
    Update(UpdateArgs),
}

/// Shared argument struct for commands that only address the container.
#[derive(Parser, Debug)]
pub struct ContainerArgs {
    /// Container name.
    #[arg(short, long, default_value = DEFAULT_CONTAINER_NAME)]
    pub name: String,
}

/// Arguments for the `start` subcommand.
#[derive(Parser, Debug)]
pub struct StartArgs {
    /// Host port to expose MatrixHub on.
    #[arg(short, long, default_value_t = DEFAULT_HOST_PORT)]
    pub port: u16,

    /// Host data directory mounted into the container.
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data: PathBuf,

    /// Container name.
    #[arg(short, long, default_value = DEFAULT_CONTAINER_NAME)]
    pub name: String,

    /// Docker image to run.
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Run the container in detached mode.
    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub detach: bool,

    /// Skip the recreate confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `logs` subcommand.
#[derive(Parser, Debug)]
pub struct LogsArgs {
    /// Container name.
    #[arg(short, long, default_value = DEFAULT_CONTAINER_NAME)]
    pub name: String,

    /// Follow log output until interrupted.
    #[arg(short, long)]
    pub follow: bool,

    /// Number of lines to show from the end of the logs.
    #[arg(long, default_value_t = DEFAULT_LOG_TAIL)]
    pub tail: u32,
}

/// Arguments for the `update` subcommand.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Container name.
    #[arg(short, long, default_value = DEFAULT_CONTAINER_NAME)]
    pub name: String,

    /// Docker image to pull.
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}
