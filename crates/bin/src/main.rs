use clap::Parser;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            "docmodel=info"
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        ))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    let result = match &cli.command {
        Commands::Field(args) => commands::field::run(args, format),
        Commands::Key(args) => commands::key::run(args, format),
        Commands::Compare(args) => commands::compare::run(args, format),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
