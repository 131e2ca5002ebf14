//! Handler for the `update` command.

use crate::cli::command::UpdateArgs;
use crate::cli::output;
use crate::error::Result;
use crate::runtime::ContainerRuntime;

/// Execute the update command.
///
/// Pulls the latest image, stops the container if running, and removes it.
/// The updated instance is not recreated automatically; the user starts it
/// with `matrixhub start`.
pub async fn execute(runtime: &dyn ContainerRuntime, args: &UpdateArgs) -> Result<()> {
    output::section("Updating MatrixHub");

    if !runtime.container_exists(&args.name).await {
        output::warning(&format!("Container \"{}\" not found", args.name));
        return Ok(());
    }

    let running = runtime.container_running(&args.name).await;

    let prompt = if running {
        "This will stop and remove the current container. Continue?"
    } else {
        "This will remove the current container. Continue?"
    };
    if !super::confirm(prompt, args.yes)? {
        output::note("Update cancelled");
        return Ok(());
    }

    let pb = output::spinner(&format!("Pulling latest image {}...", args.image));
    match runtime.pull_image(&args.image).await {
        Ok(()) => output::spinner_success(&pb, "Latest image pulled"),
        Err(err) => {
            output::spinner_fail(&pb, "Failed to pull image");
            return Err(err);
        }
    }

    if running {
        let pb = output::spinner("Stopping container...");
        match runtime.stop_container(&args.name).await {
            Ok(()) => output::spinner_success(&pb, "Container stopped"),
            Err(err) => {
                output::spinner_fail(&pb, "Failed to stop container");
                return Err(err);
            }
        }
    }

    let pb = output::spinner("Removing old container...");
    match runtime.remove_container(&args.name).await {
        Ok(()) => output::spinner_success(&pb, "Old container removed"),
        Err(err) => {
            output::spinner_fail(&pb, "Failed to remove container");
            return Err(err);
        }
    }

    output::success("MatrixHub updated successfully!");
    output::hint("matrixhub start - start the updated version");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::FakeRuntime;

    fn args(name: &str) -> UpdateArgs {
        UpdateArgs {
            name: name.to_string(),
            image: "ghcr.io/matrixhub-ai/matrixhub:main".to_string(),
            yes: true,
        }
    }

    #[tokio::test]
    async fn absent_container_is_a_no_op() {
        let runtime = FakeRuntime::new();
        execute(&runtime, &args("hub")).await.unwrap();
        assert!(runtime.mutations().is_empty());
    }

    #[tokio::test]
    async fn running_container_is_pulled_stopped_and_removed() {
        let runtime = FakeRuntime::new().with_container("hub", true);
        execute(&runtime, &args("hub")).await.unwrap();
        assert_eq!(
            runtime.mutations(),
            vec![
                "pull ghcr.io/matrixhub-ai/matrixhub:main".to_string(),
                "stop hub".to_string(),
                "remove hub".to_string(),
            ]
        );
        assert!(!runtime.container_exists("hub").await);
    }

    #[tokio::test]
    async fn stopped_container_skips_the_stop_step() {
        let runtime = FakeRuntime::new().with_container("hub", false);
        execute(&runtime, &args("hub")).await.unwrap();
        assert_eq!(
            runtime.mutations(),
            vec![
                "pull ghcr.io/matrixhub-ai/matrixhub:main".to_string(),
                "remove hub".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn pull_failure_aborts_before_any_mutation() {
        let runtime = FakeRuntime::new()
            .with_container("hub", true)
            .failing("pull", "registry unreachable");
        let err = execute(&runtime, &args("hub")).await.unwrap_err();
        assert!(err.to_string().contains("registry unreachable"));
        assert!(runtime.mutations().is_empty());
        assert!(runtime.container_exists("hub").await);
    }
}
