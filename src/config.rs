//! Build configuration: raw option collection and validation.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::BuildError;
use crate::util::fs::absolutize;

/// Default LLVM sub-projects enabled when `--components` is not given.
pub const DEFAULT_PROJECTS: &[&str] = &["clang", "lld", "clang-tools-extra"];

/// CMake build configuration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BuildType {
    #[value(name = "Debug")]
    Debug,
    #[default]
    #[value(name = "Release")]
    Release,
    #[value(name = "RelWithDebInfo")]
    RelWithDebInfo,
}

impl BuildType {
    /// The exact spelling CMake expects for `CMAKE_BUILD_TYPE`.
    pub fn as_cmake_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cmake_str())
    }
}

/// Raw, unvalidated build options as collected from the CLI.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub build_type: BuildType,
    /// Parallel compile jobs; `None` means detect host core count.
    pub jobs: Option<usize>,
    pub enable_stats: bool,
    pub export_compile_commands: bool,
    /// LLVM runtimes to build (e.g. `libcxx`, `libcxxabi`). Empty = none.
    pub runtimes: Vec<String>,
    /// Target backends; empty falls back to `all`.
    pub targets: Vec<String>,
    /// LLVM sub-projects; empty falls back to [`DEFAULT_PROJECTS`].
    pub projects: Vec<String>,
}

/// Validated, immutable build configuration.
///
/// Constructed once per invocation and consumed read-only by every stage;
/// the build directory on disk is the only state shared between stages.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    source_dir: PathBuf,
    build_dir: PathBuf,
    build_type: BuildType,
    jobs: usize,
    enable_stats: bool,
    export_compile_commands: bool,
    runtimes: Vec<String>,
    targets: Vec<String>,
    projects: Vec<String>,
}

impl BuildConfig {
    /// Validate raw options into a usable configuration.
    ///
    /// The only upfront checks are that the source directory exists and that
    /// `jobs`, when given, is at least 1; everything else is passed through
    /// for cmake to accept or reject.
    pub fn from_options(opts: BuildOptions) -> Result<BuildConfig, BuildError> {
        let source_dir = absolutize(&opts.source_dir);
        if !source_dir.exists() {
            return Err(BuildError::InvalidInput(format!(
                "source directory does not exist: {}",
                source_dir.display()
            )));
        }

        if opts.jobs == Some(0) {
            return Err(BuildError::InvalidInput(
                "--jobs must be at least 1".to_string(),
            ));
        }
        let jobs = match opts.jobs {
            Some(j) => j,
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };

        let targets = if opts.targets.is_empty() {
            vec!["all".to_string()]
        } else {
            opts.targets
        };
        let projects = if opts.projects.is_empty() {
            DEFAULT_PROJECTS.iter().map(|s| s.to_string()).collect()
        } else {
            opts.projects
        };

        Ok(BuildConfig {
            source_dir,
            build_dir: absolutize(&opts.build_dir),
            build_type: opts.build_type,
            jobs,
            enable_stats: opts.enable_stats,
            export_compile_commands: opts.export_compile_commands,
            runtimes: opts.runtimes,
            targets,
            projects,
        })
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn stats_enabled(&self) -> bool {
        self.enable_stats
    }

    pub fn export_compile_commands(&self) -> bool {
        self.export_compile_commands
    }

    pub fn runtimes(&self) -> &[String] {
        &self.runtimes
    }

    /// Whether a particular runtime (e.g. `libcxx`) was requested.
    pub fn runtime_enabled(&self, name: &str) -> bool {
        self.runtimes.iter().any(|r| r == name)
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }
}
