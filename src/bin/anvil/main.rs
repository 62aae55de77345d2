//! Anvil CLI - drive an LLVM toolchain build end to end.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use anvil::config::{BuildConfig, BuildOptions};
use anvil::util::process::SystemRunner;
use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("anvil=debug")
    } else {
        EnvFilter::new("anvil=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config = BuildConfig::from_options(BuildOptions {
        source_dir: cli.source_dir,
        build_dir: cli.build_dir,
        build_type: cli.build_type,
        jobs: cli.jobs,
        enable_stats: cli.enable_stats,
        export_compile_commands: cli.export_compile_commands,
        runtimes: cli.enable_runtimes,
        targets: cli.targets,
        projects: cli.components,
    })?;

    let report = anvil::pipeline::run(&config, &SystemRunner)?;

    println!("clang version:\n{}", report.version);
    println!();
    println!("LLVM build completed successfully");
    println!("Artifacts located in: {}", report.build_dir.display());

    Ok(())
}
