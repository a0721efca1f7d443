use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable run summary
    Terminal,
    /// Run summary as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "scalemap")]
#[command(about = "Survey scale scoring for decision-making power and marital satisfaction", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every respondent, filter the cohort and export the enriched table
    Compute {
        /// Survey export (CSV) to score
        path: PathBuf,

        /// Output file (defaults to output.csv in the working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .scalemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Summary format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: SummaryFormat,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Compute { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}
