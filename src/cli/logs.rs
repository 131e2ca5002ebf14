//! Handler for the `logs` command.

use crate::cli::command::LogsArgs;
use crate::cli::output;
use crate::error::Result;
use crate::runtime::ContainerRuntime;

/// Execute the logs command.
///
/// Prints the last `--tail` lines, or streams live output until Ctrl-C in
/// follow mode. No-ops when the container does not exist.
pub async fn execute(runtime: &dyn ContainerRuntime, args: &LogsArgs) -> Result<()> {
    if !runtime.container_exists(&args.name).await {
        output::warning(&format!("Container \"{}\" not found", args.name));
        return Ok(());
    }

    if args.follow {
        output::note(&format!(
            "Following logs for \"{}\" (Ctrl+C to stop)...",
            args.name
        ));
    }

    runtime.stream_logs(&args.name, args.follow, args.tail).await
}
