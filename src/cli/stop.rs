//! Handler for the `stop` command.

use crate::cli::command::ContainerArgs;
use crate::cli::output;
use crate::error::Result;
use crate::runtime::ContainerRuntime;

/// Execute the stop command. Stops a running container; anything else is an
/// informational no-op.
pub async fn execute(runtime: &dyn ContainerRuntime, args: &ContainerArgs) -> Result<()> {
    output::section("Stopping MatrixHub");

    if !runtime.container_exists(&args.name).await {
        output::warning(&format!("Container \"{}\" not found", args.name));
        return Ok(());
    }

    if !runtime.container_running(&args.name).await {
        output::warning(&format!("Container \"{}\" is not running", args.name));
        return Ok(());
    }

    let pb = output::spinner("Stopping container...");
    match runtime.stop_container(&args.name).await {
        Ok(()) => output::spinner_success(&pb, "MatrixHub container stopped"),
        Err(err) => {
            output::spinner_fail(&pb, "Failed to stop container");
            return Err(err);
        }
    }

    output::hint("matrixhub start - start it again");
    Ok(())
}
