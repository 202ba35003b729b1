use assert_cmd::Command;
use predicates::prelude::*;

fn waycompass_cmd() -> Command {
    Command::cargo_bin("waycompass").expect("binary exists")
}

#[test]
fn waycompass_help_prints_usage() {
    waycompass_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Compass and straightedge drawing overlay for Wayland compositors",
        ));
}

#[test]
fn list_tools_prints_registry_names() {
    waycompass_cmd()
        .arg("--list-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("compass").and(predicate::str::contains("line")));
}

#[test]
fn overlay_requires_wayland_env() {
    waycompass_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn tool_flag_still_requires_wayland_env() {
    waycompass_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--tool", "line"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}
