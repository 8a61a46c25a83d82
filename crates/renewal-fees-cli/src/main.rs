mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::patent::PatentArgs;
use commands::trademark::TrademarkArgs;

/// Trademark and patent renewal fee calculations
#[derive(Parser)]
#[command(
    name = "ipfee",
    version,
    about = "Trademark and patent renewal fee calculations",
    long_about = "A CLI for computing itemized trademark and patent renewal fees \
                  with decimal precision: base fees, per-class and supplementary \
                  charges, late penalties, and entity discounts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate trademark renewal fees
    Trademark(TrademarkArgs),
    /// Calculate patent renewal (annuity) fees
    Patent(PatentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Text,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Trademark(args) => commands::trademark::run_trademark(args),
        Commands::Patent(args) => commands::patent::run_patent(args),
        Commands::Version => {
            println!("ipfee {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
