//! CLI Adapter.

mod check;
mod send;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wabulk")]
#[command(version)]
#[command(
    about = "Send WhatsApp template messages to recipients listed in a spreadsheet",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one template message per spreadsheet row
    #[clap(visible_alias = "s")]
    Send(send::SendArgs),
    /// Validate a spreadsheet without sending anything
    #[clap(visible_alias = "c")]
    Check {
        /// Workbook path (.xlsx, .xls, .ods)
        file: std::path::PathBuf,
        /// Sheet holding the recipients
        #[arg(long, default_value = crate::domain::configuration::DEFAULT_SHEET)]
        sheet: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Send(args) => send::run_send(args),
        Commands::Check { file, sheet } => check::run_check(&file, &sheet).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
