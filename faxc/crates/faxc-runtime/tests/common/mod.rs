//! Test utilities for runtime behaviour that ends the process
//!
//! Abort-policy violations and the C ABI checks call `exit(1)`, so they run
//! in a child copy of the test binary. The child executes only
//! `scenario_entry`, which dispatches on `SCENARIO_VAR`.

use std::process::Command;

/// Selects the scenario the child runs
pub const SCENARIO_VAR: &str = "FAXC_RUNTIME_SCENARIO";

/// Name of the test function that hosts scenarios in the child
pub const SCENARIO_ENTRY: &str = "scenario_entry";

/// Captured result of a child run
#[derive(Debug)]
pub struct ChildOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Run `scenario` in a fresh process and collect its output
pub fn run_scenario(scenario: &str) -> ChildOutput {
    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args([
            "--exact",
            SCENARIO_ENTRY,
            "--nocapture",
            "--test-threads=1",
            "--quiet",
        ])
        .env(SCENARIO_VAR, scenario)
        .output()
        .expect("spawn test binary");

    ChildOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
