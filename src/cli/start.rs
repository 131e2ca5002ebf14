//! Handler for the `start` command.

use crate::cli::command::StartArgs;
use crate::cli::{banner, output, paths};
use crate::error::{Result, RuntimeError};
use crate::runtime::{ContainerRuntime, RunConfig};

/// Execute the start command.
///
/// Creates and starts the container if absent, offers to recreate it when a
/// stopped instance already exists, and no-ops when it is already running.
pub async fn execute(runtime: &dyn ContainerRuntime, args: &StartArgs) -> Result<()> {
    if !output::is_json() && !output::is_quiet() {
        banner::print_banner();
    }
    output::section("Starting MatrixHub");

    let pb = output::spinner("Checking Docker installation...");
    if !runtime.installed().await {
        output::spinner_fail(&pb, "Docker is not installed or not in PATH");
        output::note("Install Docker first: https://docs.docker.com/get-docker/");
        return Err(RuntimeError::NotInstalled.into());
    }
    output::spinner_success(&pb, "Docker is installed");

    if runtime.container_running(&args.name).await {
        output::warning(&format!(
            "Container \"{}\" is already running",
            args.name
        ));
        output::note(&format!(
            "Access MatrixHub at http://localhost:{}",
            args.port
        ));
        return Ok(());
    }

    if runtime.container_exists(&args.name).await {
        let recreate = super::confirm(
            &format!(
                "Container \"{}\" already exists. Remove and recreate?",
                args.name
            ),
            args.yes,
        )?;
        if !recreate {
            output::note("Operation cancelled");
            return Ok(());
        }

        let pb = output::spinner("Removing existing container...");
        match runtime.remove_container(&args.name).await {
            Ok(()) => output::spinner_success(&pb, "Container removed"),
            Err(err) => {
                output::spinner_fail(&pb, "Failed to remove container");
                return Err(err);
            }
        }
    }

    let data_dir = paths::absolute_data_dir(&args.data);

    // Best-effort image refresh; on failure the local image is used.
    let pb = output::spinner(&format!("Pulling image {}...", args.image));
    match runtime.pull_image(&args.image).await {
        Ok(()) => output::spinner_success(&pb, "Image pulled"),
        Err(_) => output::spinner_warn(
            &pb,
            "Failed to pull image, will use local image if available",
        ),
    }

    let config = RunConfig {
        name: args.name.clone(),
        image: args.image.clone(),
        port: args.port,
        data_dir: data_dir.clone(),
        detach: args.detach,
    };

    let pb = output::spinner("Starting MatrixHub container...");
    match runtime.create_container(&config).await {
        Ok(()) => output::spinner_success(&pb, "MatrixHub container started"),
        Err(err) => {
            output::spinner_fail(&pb, "Failed to start container");
            return Err(err);
        }
    }

    output::success("MatrixHub is now running!");
    output::field(
        "URL",
        output::highlight(format!("http://localhost:{}", args.port)),
    );
    output::field("Data", data_dir.display());
    output::field("Container", &args.name);
    output::hint("matrixhub status   - check container status");
    output::hint("matrixhub logs     - view container logs");
    output::hint("matrixhub stop     - stop the container");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::FakeRuntime;
    use std::path::PathBuf;

    fn args(name: &str) -> StartArgs {
        StartArgs {
            port: 9527,
            data: PathBuf::from("/tmp/matrixhub-data"),
            name: name.to_string(),
            image: "ghcr.io/matrixhub-ai/matrixhub:main".to_string(),
            detach: true,
            yes: true,
        }
    }

    #[tokio::test]
    async fn fails_fast_when_docker_is_missing() {
        let runtime = FakeRuntime::new().without_docker();
        let err = execute(&runtime, &args("hub")).await.unwrap_err();
        assert!(err.to_string().contains("not installed"));
        assert!(runtime.mutations().is_empty());
    }

    #[tokio::test]
    async fn running_container_is_a_no_op() {
        let runtime = FakeRuntime::new().with_container("hub", true);
        execute(&runtime, &args("hub")).await.unwrap();
        assert!(runtime.mutations().is_empty());
    }

    #[tokio::test]
    async fn absent_container_is_pulled_and_created() {
        let runtime = FakeRuntime::new();
        execute(&runtime, &args("hub")).await.unwrap();
        assert_eq!(
            runtime.mutations(),
            vec![
                "pull ghcr.io/matrixhub-ai/matrixhub:main".to_string(),
                "create hub".to_string(),
            ]
        );
        assert!(runtime.container_running("hub").await);
    }

    #[tokio::test]
    async fn stopped_container_is_recreated_with_yes() {
        let runtime = FakeRuntime::new().with_container("hub", false);
        execute(&runtime, &args("hub")).await.unwrap();
        assert_eq!(
            runtime.mutations(),
            vec![
                "remove hub".to_string(),
                "pull ghcr.io/matrixhub-ai/matrixhub:main".to_string(),
                "create hub".to_string(),
            ]
        );
        assert!(runtime.container_running("hub").await);
    }

    #[tokio::test]
    async fn pull_failure_is_tolerated() {
        let runtime = FakeRuntime::new().failing("pull", "registry unreachable");
        execute(&runtime, &args("hub")).await.unwrap();
        assert_eq!(runtime.mutations(), vec!["create hub".to_string()]);
    }

    #[tokio::test]
    async fn create_failure_is_fatal() {
        let runtime = FakeRuntime::new().failing("create", "port is already allocated");
        let err = execute(&runtime, &args("hub")).await.unwrap_err();
        assert!(err.to_string().contains("port is already allocated"));
        assert!(!runtime.container_exists("hub").await);
    }
}
