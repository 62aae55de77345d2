//! Pipeline orchestration: configure, compile, verify, in that order.

use anyhow::bail;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::stage::{compile, configure, verify};
use crate::util::process::{find_cmake, find_ninja, ProcessRunner};

/// Outcome of a fully successful pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Where the artifacts ended up.
    pub build_dir: std::path::PathBuf,
    /// Captured `clang --version` text.
    pub version: String,
}

fn preflight() -> anyhow::Result<()> {
    if find_cmake().is_none() {
        bail!(
            "cmake not found\n\
             \n\
             CMake is required to configure the LLVM build.\n\
             Install CMake and ensure it's in your PATH."
        );
    }
    if find_ninja().is_none() {
        bail!(
            "ninja not found\n\
             \n\
             Ninja is required to drive the LLVM build.\n\
             Install Ninja and ensure it's in your PATH."
        );
    }
    Ok(())
}

/// Run the full pipeline against a validated configuration.
///
/// Strictly sequential, short-circuiting on the first stage failure. A
/// failed stage leaves whatever it wrote in the build directory for
/// inspection; re-running is safe because cmake and ninja are incremental.
pub fn run(config: &BuildConfig, runner: &dyn ProcessRunner) -> Result<PipelineReport, BuildError> {
    preflight()?;

    configure::configure(config, runner)?;
    compile::compile(config, runner)?;
    let version = verify::verify(config, runner)?;

    tracing::info!("build completed in {}", config.build_dir().display());
    Ok(PipelineReport {
        build_dir: config.build_dir().to_path_buf(),
        version,
    })
}

/// Same as [`run`] but without the PATH preflight, for callers that manage
/// tool discovery themselves.
pub fn run_unchecked(
    config: &BuildConfig,
    runner: &dyn ProcessRunner,
) -> Result<PipelineReport, BuildError> {
    configure::configure(config, runner)?;
    compile::compile(config, runner)?;
    let version = verify::verify(config, runner)?;

    Ok(PipelineReport {
        build_dir: config.build_dir().to_path_buf(),
        version,
    })
}
