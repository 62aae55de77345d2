//! Anvil - a build front-end for LLVM toolchain builds
//!
//! This crate provides the core library functionality for Anvil: option
//! validation, CMake configure and Ninja compile invocation, and post-build
//! artifact verification.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod stage;
pub mod util;

/// Test utilities and mocks for Anvil unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock process runner so stage logic can be
/// exercised without spawning cmake or ninja.
#[cfg(test)]
pub mod test_support;

pub use config::{BuildConfig, BuildOptions, BuildType};
pub use error::BuildError;
pub use pipeline::{run, PipelineReport};
pub use util::process::{ProcessBuilder, ProcessOutput, ProcessRunner, SystemRunner};
