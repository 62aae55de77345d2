//! Test utilities and mocks for Anvil unit tests.
//!
//! Provides a mock [`ProcessRunner`] so stage and pipeline logic can be
//! exercised without spawning cmake, ninja, or clang.
//!
//! # Example
//!
//! ```rust,ignore
//! use anvil::test_support::MockRunner;
//! use anvil::util::process::ProcessOutput;
//!
//! let runner = MockRunner::new().expect("cmake", ProcessOutput {
//!     code: Some(0),
//!     stdout: String::new(),
//!     stderr: String::new(),
//! });
//! // Pass &runner to a stage, then assert on runner.calls().
//! ```

use std::sync::Mutex;

use anyhow::{bail, Result};

use crate::util::process::{ProcessBuilder, ProcessOutput, ProcessRunner};

/// Expectation for a command execution, matched by substring.
struct Expectation {
    pattern: String,
    output: ProcessOutput,
}

/// Mock process runner that matches commands against substring patterns
/// and records every invocation for later assertions.
#[derive(Default)]
pub struct MockRunner {
    expectations: Vec<Expectation>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no expectations. Any invocation will fail.
    pub fn new() -> Self {
        MockRunner::default()
    }

    /// Return `output` for any command whose display form contains `pattern`.
    ///
    /// Expectations are checked in registration order; the first match wins.
    pub fn expect(mut self, pattern: impl Into<String>, output: ProcessOutput) -> Self {
        self.expectations.push(Expectation {
            pattern: pattern.into(),
            output,
        });
        self
    }

    /// The display form of every command run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, cmd: &ProcessBuilder) -> Result<ProcessOutput> {
        let display = cmd.display_command();
        self.calls.lock().unwrap().push(display.clone());

        for expectation in &self.expectations {
            if display.contains(&expectation.pattern) {
                return Ok(expectation.output.clone());
            }
        }
        bail!("unexpected command in test: `{}`", display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_matches_and_records() {
        let runner = MockRunner::new().expect(
            "cmake",
            ProcessOutput {
                code: Some(0),
                stdout: "ok".to_string(),
                stderr: String::new(),
            },
        );

        let cmd = ProcessBuilder::new("cmake").arg("-G").arg("Ninja");
        let output = runner.run(&cmd).unwrap();
        assert!(output.success());
        assert_eq!(runner.calls(), ["cmake -G Ninja"]);
    }

    #[test]
    fn test_mock_runner_rejects_unexpected() {
        let runner = MockRunner::new();
        assert!(runner.run(&ProcessBuilder::new("ninja")).is_err());
    }
}
