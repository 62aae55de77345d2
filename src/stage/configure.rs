//! Configure stage: generate the CMake build description.

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::util::fs::ensure_dir;
use crate::util::process::{ProcessBuilder, ProcessRunner};

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

/// Build the CMake argument list for a configuration.
///
/// Pure and order-stable: the same config always yields the same argument
/// vector. The runtimes definition appears only when runtimes were requested,
/// and the source directory is always the final positional argument.
pub fn cmake_args(config: &BuildConfig) -> Vec<String> {
    let mut args = vec![
        "-G".to_string(),
        "Ninja".to_string(),
        format!("-DCMAKE_BUILD_TYPE={}", config.build_type()),
        format!("-DLLVM_ENABLE_PROJECTS={}", config.projects().join(";")),
        format!("-DLLVM_TARGETS_TO_BUILD={}", config.targets().join(";")),
        format!("-DLLVM_FORCE_ENABLE_STATS={}", on_off(config.stats_enabled())),
        format!(
            "-DCMAKE_EXPORT_COMPILE_COMMANDS={}",
            on_off(config.export_compile_commands())
        ),
    ];

    if !config.runtimes().is_empty() {
        args.push(format!(
            "-DLLVM_ENABLE_RUNTIMES={}",
            config.runtimes().join(";")
        ));
    }

    args.push(config.source_dir().display().to_string());
    args
}

/// Run cmake against the build directory.
///
/// Creates the build directory first if needed. A non-zero cmake exit is
/// fatal and carries the tool's output; there is no retry.
pub fn configure(config: &BuildConfig, runner: &dyn ProcessRunner) -> Result<(), BuildError> {
    tracing::info!("configuring build in {}", config.build_dir().display());
    ensure_dir(config.build_dir())?;

    let cmd = ProcessBuilder::new("cmake")
        .args(cmake_args(config))
        .cwd(config.build_dir());
    tracing::debug!("running: {}", cmd.display_command());

    let output = runner.run(&cmd)?;
    if !output.success() {
        return Err(BuildError::ConfigureFailed {
            code: output.code,
            output: output.combined(),
        });
    }
    Ok(())
}
