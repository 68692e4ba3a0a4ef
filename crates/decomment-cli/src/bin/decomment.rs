use anyhow::{Context, Result};
use clap::Parser;

use decomment_cli::args::CliArgs;
use decomment_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Logging stays off unless DECOMMENT_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = driver::run(&args, &cwd, &mut stdout.lock(), &mut stderr.lock())?;

    std::process::exit(summary.exit_code());
}
