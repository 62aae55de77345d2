//! Pipeline error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised by option validation or any pipeline stage.
///
/// Every variant is terminal: stages never retry, and the orchestrator
/// aborts the pipeline on the first error it sees. Variants carrying tool
/// output include it verbatim so the user sees what cmake/ninja printed.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configure stage failed (cmake exited with {})\n{output}", display_code(*.code))]
    ConfigureFailed { code: Option<i32>, output: String },

    #[error("compile stage failed (ninja exited with {})\n{output}", display_code(*.code))]
    CompileFailed { code: Option<i32>, output: String },

    #[error("verification failed: expected artifact missing: {}", .path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("verification failed: runtime artifact missing: {}", .path.display())]
    RuntimeArtifactMissing { path: PathBuf },

    #[error("verification failed: could not execute built compiler: {0}")]
    ExecutionVerificationFailed(String),

    #[error("unexpected failure: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

fn display_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (killed by signal?)".to_string(),
    }
}
