//! Lifecycle pipeline tests against a scripted runtime.
//!
//! These drive the command flows through the library API with the in-memory
//! [`FakeRuntime`] from the `testkit` feature, walking the container state
//! machine from absent through running and back without a Docker daemon.

use std::path::PathBuf;

use matrixhub::cli::command::{ContainerArgs, LogsArgs, StartArgs, UpdateArgs};
use matrixhub::cli::{logs, restart, start, status, stop, update};
use matrixhub::runtime::ContainerRuntime;
use matrixhub::testkit::FakeRuntime;

const IMAGE: &str = "ghcr.io/matrixhub-ai/matrixhub:main";

fn start_args(name: &str, data: PathBuf) -> StartArgs {
    StartArgs {
        port: 9527,
        data,
        name: name.to_string(),
        image: IMAGE.to_string(),
        detach: true,
        yes: true,
    }
}

fn name_args(name: &str) -> ContainerArgs {
    ContainerArgs {
        name: name.to_string(),
    }
}

fn update_args(name: &str) -> UpdateArgs {
    UpdateArgs {
        name: name.to_string(),
        image: IMAGE.to_string(),
        yes: true,
    }
}

#[tokio::test]
async fn deploy_stop_restart_cycle() {
    let data = tempfile::tempdir().unwrap();
    let runtime = FakeRuntime::new();

    start::execute(&runtime, &start_args("hub", data.path().to_path_buf()))
        .await
        .unwrap();
    assert!(runtime.container_running("hub").await);

    stop::execute(&runtime, &name_args("hub")).await.unwrap();
    assert!(runtime.container_exists("hub").await);
    assert!(!runtime.container_running("hub").await);

    restart::execute(&runtime, &name_args("hub")).await.unwrap();
    assert!(runtime.container_running("hub").await);
}

#[tokio::test]
async fn second_start_issues_no_mutations() {
    let data = tempfile::tempdir().unwrap();
    let runtime = FakeRuntime::new();
    let args = start_args("hub", data.path().to_path_buf());

    start::execute(&runtime, &args).await.unwrap();
    let after_first = runtime.mutations();
    assert_eq!(
        after_first,
        vec![format!("pull {IMAGE}"), "create hub".to_string()]
    );

    start::execute(&runtime, &args).await.unwrap();
    assert_eq!(runtime.mutations(), after_first);
}

#[tokio::test]
async fn update_tears_down_and_leaves_absent() {
    let data = tempfile::tempdir().unwrap();
    let runtime = FakeRuntime::new();

    start::execute(&runtime, &start_args("hub", data.path().to_path_buf()))
        .await
        .unwrap();
    update::execute(&runtime, &update_args("hub")).await.unwrap();

    assert!(!runtime.container_exists("hub").await);
    assert_eq!(
        runtime.mutations(),
        vec![
            format!("pull {IMAGE}"),
            "create hub".to_string(),
            format!("pull {IMAGE}"),
            "stop hub".to_string(),
            "remove hub".to_string(),
        ]
    );
}

#[tokio::test]
async fn status_is_a_pure_query() {
    let runtime = FakeRuntime::new().with_container("hub", true);
    status::execute(&runtime, &name_args("hub")).await.unwrap();
    status::execute(&runtime, &name_args("other")).await.unwrap();
    assert!(runtime.mutations().is_empty());
}

#[tokio::test]
async fn logs_tail_is_forwarded_to_the_runtime() {
    let runtime = FakeRuntime::new().with_container("hub", true);
    let args = LogsArgs {
        name: "hub".to_string(),
        follow: false,
        tail: 50,
    };
    logs::execute(&runtime, &args).await.unwrap();
    assert_eq!(
        runtime.mutations(),
        vec!["logs hub follow=false tail=50".to_string()]
    );
}

#[tokio::test]
async fn failed_create_leaves_the_registry_untouched() {
    let data = tempfile::tempdir().unwrap();
    let runtime = FakeRuntime::new().failing("create", "port is already allocated");

    let err = start::execute(&runtime, &start_args("hub", data.path().to_path_buf()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("port is already allocated"));
    assert!(!runtime.container_exists("hub").await);
}
