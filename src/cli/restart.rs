//! Handler for the `restart` command.

use crate::cli::command::ContainerArgs;
use crate::cli::output;
use crate::error::Result;
use crate::runtime::ContainerRuntime;

/// Execute the restart command. No-ops when the container does not exist.
pub async fn execute(runtime: &dyn ContainerRuntime, args: &ContainerArgs) -> Result<()> {
    output::section("Restarting MatrixHub");

    if !runtime.container_exists(&args.name).await {
        output::warning(&format!("Container \"{}\" not found", args.name));
        output::hint("matrixhub start - create a new container");
        return Ok(());
    }

    let pb = output::spinner("Restarting container...");
    match runtime.restart_container(&args.name).await {
        Ok(()) => output::spinner_success(&pb, "MatrixHub container restarted"),
        Err(err) => {
            output::spinner_fail(&pb, "Failed to restart container");
            return Err(err);
        }
    }

    output::success("MatrixHub is now running!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::FakeRuntime;

    fn args(name: &str) -> ContainerArgs {
        ContainerArgs {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn absent_container_is_a_no_op() {
        let runtime = FakeRuntime::new();
        execute(&runtime, &args("hub")).await.unwrap();
        assert!(runtime.mutations().is_empty());
    }

    #[tokio::test]
    async fn stopped_container_is_restarted() {
        let runtime = FakeRuntime::new().with_container("hub", false);
        execute(&runtime, &args("hub")).await.unwrap();
        assert_eq!(runtime.mutations(), vec!["restart hub".to_string()]);
        assert!(runtime.container_running("hub").await);
    }

    #[tokio::test]
    async fn restart_failure_is_fatal() {
        let runtime = FakeRuntime::new()
            .with_container("hub", true)
            .failing("restart", "daemon not responding");
        let err = execute(&runtime, &args("hub")).await.unwrap_err();
        assert!(err.to_string().contains("daemon not responding"));
    }
}
