//! Verification stage: check artifacts and execute the built compiler.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::util::process::{ProcessBuilder, ProcessRunner};

/// One expected artifact under the build directory.
#[derive(Debug, Clone)]
pub struct ArtifactCheck {
    /// Path relative to the build directory.
    pub relative: PathBuf,
    /// Whether absence of this artifact is a runtime-component failure
    /// rather than a core-toolchain failure.
    pub runtime: bool,
}

/// Relative path of the primary compiler under the build directory.
pub fn clang_relative_path() -> PathBuf {
    PathBuf::from("bin").join(format!("clang{}", std::env::consts::EXE_SUFFIX))
}

/// The artifact checks that apply to a configuration, in evaluation order.
///
/// Declarative so new artifacts can be added without touching the
/// verification control flow: the compiler binary is always required; the
/// libc++ umbrella header only when the libcxx runtime was requested.
pub fn artifact_checks(config: &BuildConfig) -> Vec<ArtifactCheck> {
    let mut checks = vec![ArtifactCheck {
        relative: clang_relative_path(),
        runtime: false,
    }];

    if config.runtime_enabled("libcxx") {
        checks.push(ArtifactCheck {
            relative: ["include", "c++", "v1", "vector"].iter().collect(),
            runtime: true,
        });
    }

    checks
}

/// Verify the build: expected artifacts exist, and the produced clang runs.
///
/// Returns the captured `clang --version` text on success. Verification is
/// strictly pass/fail; the first missing artifact or execution failure
/// aborts.
pub fn verify(config: &BuildConfig, runner: &dyn ProcessRunner) -> Result<String, BuildError> {
    tracing::info!("verifying build artifacts");

    for check in artifact_checks(config) {
        let path = config.build_dir().join(&check.relative);
        if !path.exists() {
            return Err(if check.runtime {
                BuildError::RuntimeArtifactMissing { path }
            } else {
                BuildError::ArtifactMissing { path }
            });
        }
    }

    let clang = config.build_dir().join(clang_relative_path());
    let cmd = ProcessBuilder::new(&clang).arg("--version");
    tracing::debug!("running: {}", cmd.display_command());

    let output = runner
        .run(&cmd)
        .map_err(|e| BuildError::ExecutionVerificationFailed(format!("{e:#}")))?;
    if !output.success() {
        return Err(BuildError::ExecutionVerificationFailed(format!(
            "`{}` exited with {:?}\n{}",
            cmd.display_command(),
            output.code,
            output.combined()
        )));
    }

    Ok(output.combined().trim().to_string())
}
