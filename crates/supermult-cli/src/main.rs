mod cli;
mod commands;
mod error;
mod export;
mod logging;
mod render;
mod ui;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use supermultiplet::core::shells::ShellSpace;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("supermult CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Su4(args) => {
            info!("Dispatching to 'su4' command.");
            commands::su4::run(args)
        }
        Commands::Sd(args) => {
            info!("Dispatching to 'sd' command.");
            commands::shell::run(ShellSpace::Sd, &args.rows, args.export.as_deref())
        }
        Commands::Pf(args) => {
            info!("Dispatching to 'pf' command.");
            commands::shell::run(ShellSpace::Pf, &args.rows, args.export.as_deref())
        }
        Commands::Batch(args) => {
            info!("Dispatching to 'batch' command.");
            commands::batch::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
