//! Integration tests for `depbuild plan`
//!
//! The plan command prints the dependency-ordered build plan without
//! building: dependencies and parents first, cycles and duplicate
//! coordinates rejected.

mod common;

use common::{manifest, manifest_with_parent, TestWorkspace};
use std::process::Command;

/// Helper to run depbuild plan
fn run_plan(workspace: &TestWorkspace, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_depbuild"));
    cmd.arg("plan").arg("--dir").arg(workspace.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute depbuild plan")
}

#[test]
fn test_plan_orders_dependency_before_dependent() {
    let workspace = TestWorkspace::new();
    workspace.add_project(
        "app",
        &manifest("org.test", "app", "1.0", &[("org.test", "core", "1.0")]),
    );
    workspace.add_project("core", &manifest("org.test", "core", "1.0", &[]));

    let output = run_plan(&workspace, &[]);
    assert!(
        output.status.success(),
        "plan failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let core_pos = stdout.find("org.test:core:lib:1.0").expect("core missing");
    let app_pos = stdout.find("org.test:app:lib:1.0").expect("app missing");
    assert!(core_pos < app_pos, "core must precede app:\n{stdout}");
}

#[test]
fn test_plan_orders_parent_before_child() {
    let workspace = TestWorkspace::new();
    workspace.add_project(
        "child",
        &manifest_with_parent("org.test", "child", "1.0", ("org.test", "parent", "1.0")),
    );
    workspace.add_project("parent", &manifest("org.test", "parent", "1.0", &[]));

    let output = run_plan(&workspace, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parent_pos = stdout.find("org.test:parent:lib:1.0").expect("parent missing");
    let child_pos = stdout.find("org.test:child:lib:1.0").expect("child missing");
    assert!(parent_pos < child_pos, "parent must precede child:\n{stdout}");
}

#[test]
fn test_plan_json_output_is_parseable() {
    let workspace = TestWorkspace::new();
    workspace.add_project(
        "app",
        &manifest("org.test", "app", "1.0", &[("org.test", "core", "1.0")]),
    );
    workspace.add_project("core", &manifest("org.test", "core", "1.0", &[]));

    let output = run_plan(&workspace, &["--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ids: Vec<String> = serde_json::from_str(stdout.trim()).expect("invalid JSON plan");
    assert_eq!(ids, ["org.test:core:lib:1.0", "org.test:app:lib:1.0"]);
}

#[test]
fn test_plan_rejects_dependency_cycle() {
    let workspace = TestWorkspace::new();
    workspace.add_project(
        "a",
        &manifest("org.test", "a", "1.0", &[("org.test", "b", "1.0")]),
    );
    workspace.add_project(
        "b",
        &manifest("org.test", "b", "1.0", &[("org.test", "a", "1.0")]),
    );

    let output = run_plan(&workspace, &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Cycle detected with dependency"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_plan_rejects_duplicate_coordinates() {
    let workspace = TestWorkspace::new();
    workspace.add_project("widget-1", &manifest("org.test", "widget", "1.0", &[]));
    workspace.add_project("widget-2", &manifest("org.test", "widget", "2.0", &[]));

    let output = run_plan(&workspace, &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is duplicated"), "unexpected stderr: {stderr}");
}

#[test]
fn test_plan_ignores_dependencies_outside_the_workspace() {
    let workspace = TestWorkspace::new();
    workspace.add_project(
        "app",
        &manifest("org.test", "app", "1.0", &[("org.external", "mystery", "3.0")]),
    );

    let output = run_plan(&workspace, &[]);
    assert!(
        output.status.success(),
        "plan failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("org.test:app:lib:1.0"));
}

#[test]
fn test_plan_of_empty_workspace_reports_no_projects() {
    let workspace = TestWorkspace::new();

    let output = run_plan(&workspace, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No projects found"), "unexpected stdout: {stdout}");
}
