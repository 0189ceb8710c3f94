use clap::Parser;
use gainerbot::adapter::inbound::cli::command::{Cli, Commands, RunArgs};
use gainerbot::adapter::inbound::cli::{intervals, run, top};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            tokio::select! {
                result = run::execute(&args) => result,
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    Ok(())
                }
            }
        }
        Commands::Top(args) => top::execute(&args).await,
        Commands::Intervals => {
            intervals::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        eprintln!("gainerbot: {e}");
        std::process::exit(1);
    }

    info!("gainerbot stopped");
}
