//! Handler for the `status` command.

use crate::cli::command::{ContainerArgs, DEFAULT_HOST_PORT};
use crate::cli::output;
use crate::error::Result;
use crate::runtime::ContainerRuntime;

/// Execute the status command.
///
/// Reports existence, running state, and the runtime's raw status text for
/// the named container. Purely a query; never mutates.
pub async fn execute(runtime: &dyn ContainerRuntime, args: &ContainerArgs) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));

    if !runtime.container_exists(&args.name).await {
        output::warning(&format!("Container \"{}\" not found", args.name));
        output::hint("matrixhub start - deploy a new instance");
        return Ok(());
    }

    let running = runtime.container_running(&args.name).await;
    let status = runtime.container_status(&args.name).await;

    output::field("Container", &args.name);
    output::field("Status", if running { "● running" } else { "○ stopped" });
    output::field("Details", status);

    if running {
        output::field(
            "URL",
            output::highlight(format!("http://localhost:{DEFAULT_HOST_PORT}")),
        );
    }

    Ok(())
}
