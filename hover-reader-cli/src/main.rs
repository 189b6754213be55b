//! Hover reader command-line host

use anyhow::Result;
use clap::Parser;
use hover_reader_cli::commands::Commands;
use hover_reader_cli::config::GlobalArgs;

/// Page through a text file one hover at a time
#[derive(Debug, Parser)]
#[command(name = "hover-reader", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.global.init_logging();
    cli.command.execute(&cli.global)
}
