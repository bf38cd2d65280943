pub mod add;
pub mod export;
pub mod init;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record today's work interval")]
    Add(add::AddArgs),
    #[command(about = "Get summary")]
    Sum(sum::SumArgs),
    #[command(about = "Export a month's ledger to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
