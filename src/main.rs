use anyhow::Result;
use clap::Parser;
use scalemap::cli::{Cli, Commands};
use scalemap::commands::{self, ComputeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    scalemap::observability::init_logging(cli.command.verbosity())?;

    match cli.command {
        Commands::Compute {
            path,
            output,
            config,
            format,
            verbosity: _,
        } => commands::handle_compute(ComputeConfig {
            path,
            output,
            config,
            format,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
