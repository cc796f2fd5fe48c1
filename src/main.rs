use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create empty companion headers for C and C++ sources", long_about = None)]
struct Cli {
    /// Directory to scan recursively for .c, .cpp and .cxx files
    root: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = commands::ensure::execute(&cli.root)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
