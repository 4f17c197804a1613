//! Notebook launch tests: command order and the reported URL.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use dockhand_cli::application::services::dispatch::Dispatcher;
use dockhand_cli::application::services::notebook::{NotebookPlan, clone_materials, start_notebook};
use dockhand_cli::domain::{DispatchError, JupyterConfig};

use crate::helpers::{err_output, prod};
use crate::mocks::{RecordingReporter, ScriptedRunner};

#[tokio::test]
async fn test_notebook_runs_container_then_clones_materials() {
    let runner = ScriptedRunner::new();
    let reporter = RecordingReporter::default();
    let ctx = prod();
    let config = JupyterConfig::default();
    let dispatcher = Dispatcher::new(&runner, &ctx, &reporter);
    let plan = NotebookPlan::new(&ctx, &config, "ada", None, 8889);

    start_notebook(&dispatcher, &plan).await.expect("start");
    clone_materials(&dispatcher, &plan, &config.materials_repo)
        .await
        .expect("clone");

    let lines = runner.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("docker run -d -p 8889:8889 --name jupytainer_ada"));
    assert!(lines[1].starts_with("docker exec jupytainer_ada bash -c git clone"));
    for call in runner.calls() {
        assert!(!call.captured, "notebook steps stream their output");
        assert_eq!(call.env[0].1, "ssh://deploy@10.0.0.7");
    }
    assert_eq!(plan.url, "http://10.0.0.7:8889/?token=mp84");
}

#[tokio::test]
async fn test_notebook_name_clash_fails_before_clone() {
    let runner = ScriptedRunner::new().then(err_output(125, b"Conflict. The container name is already in use"));
    let reporter = RecordingReporter::default();
    let ctx = prod();
    let config = JupyterConfig::default();
    let dispatcher = Dispatcher::new(&runner, &ctx, &reporter);
    let plan = NotebookPlan::new(&ctx, &config, "ada", Some("s3cret"), 8888);

    let err = start_notebook(&dispatcher, &plan).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DispatchError>(),
        Some(DispatchError::CommandFailed { code: Some(125), .. })
    ));
    assert_eq!(runner.calls().len(), 1);
}
