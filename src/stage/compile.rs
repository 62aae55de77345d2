//! Compile stage: drive the generated build with Ninja.

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::util::process::{ProcessBuilder, ProcessRunner};

/// Run `ninja -j <jobs>` in the configured build directory.
///
/// A single invocation; Ninja manages its own internal parallelism and
/// incremental state. Non-zero exit is fatal with the tool's output
/// surfaced verbatim.
pub fn compile(config: &BuildConfig, runner: &dyn ProcessRunner) -> Result<(), BuildError> {
    tracing::info!("building with {} parallel jobs", config.jobs());

    let cmd = ProcessBuilder::new("ninja")
        .arg("-j")
        .arg(config.jobs().to_string())
        .cwd(config.build_dir());
    tracing::debug!("running: {}", cmd.display_command());

    let output = runner.run(&cmd)?;
    if !output.success() {
        return Err(BuildError::CompileFailed {
            code: output.code,
            output: output.combined(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildConfig, BuildOptions};
    use crate::test_support::MockRunner;
    use crate::util::process::ProcessOutput;
    use tempfile::TempDir;

    fn config(tmp: &TempDir, jobs: usize) -> BuildConfig {
        let source = tmp.path().join("llvm");
        std::fs::create_dir_all(&source).unwrap();
        BuildConfig::from_options(BuildOptions {
            source_dir: source,
            build_dir: tmp.path().join("build"),
            jobs: Some(jobs),
            ..BuildOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn test_compile_invokes_ninja_with_jobs() {
        let tmp = TempDir::new().unwrap();
        let runner = MockRunner::new().expect("ninja", ProcessOutput {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        });

        compile(&config(&tmp, 8), &runner).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("ninja -j 8"));
    }

    #[test]
    fn test_compile_failure_surfaces_output() {
        let tmp = TempDir::new().unwrap();
        let runner = MockRunner::new().expect("ninja", ProcessOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: "FAILED: lib/Support/CMakeFiles".to_string(),
        });

        let err = compile(&config(&tmp, 4), &runner).unwrap_err();
        match err {
            BuildError::CompileFailed { code, output } => {
                assert_eq!(code, Some(1));
                assert!(output.contains("FAILED"));
            }
            other => panic!("expected CompileFailed, got {other:?}"),
        }
    }
}
