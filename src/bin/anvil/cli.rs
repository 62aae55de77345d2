//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use anvil::config::BuildType;

/// Anvil - a build front-end for LLVM toolchain builds
///
/// Configures an LLVM source tree with CMake, builds it with Ninja, and
/// verifies the produced clang by running it.
#[derive(Parser)]
#[command(name = "anvil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the LLVM source directory (llvm-project/llvm)
    #[arg(long, value_name = "DIR")]
    pub source_dir: PathBuf,

    /// Build configuration type
    #[arg(long, default_value = "Release")]
    pub build_type: BuildType,

    /// Build directory path
    #[arg(long, default_value = "build", value_name = "DIR")]
    pub build_dir: PathBuf,

    /// Number of parallel jobs (defaults to host core count)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Enable LLVM statistics tracking (-DLLVM_FORCE_ENABLE_STATS=ON)
    #[arg(long)]
    pub enable_stats: bool,

    /// Generate compile_commands.json (-DCMAKE_EXPORT_COMPILE_COMMANDS=ON)
    #[arg(long)]
    pub export_compile_commands: bool,

    /// LLVM runtimes to build (semicolon-separated, e.g. "libcxx;libcxxabi")
    #[arg(long, value_delimiter = ';', value_name = "LIST")]
    pub enable_runtimes: Vec<String>,

    /// LLVM targets to build (semicolon-separated, e.g. "X86;ARM")
    #[arg(long, value_delimiter = ';', default_value = "all", value_name = "LIST")]
    pub targets: Vec<String>,

    /// LLVM components to build (semicolon-separated)
    #[arg(
        long,
        value_delimiter = ';',
        default_value = "clang;lld;clang-tools-extra",
        value_name = "LIST"
    )]
    pub components: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
