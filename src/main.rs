use std::process::ExitCode;

use clap::Parser;

use healthhub::cli::{self, Cli};
use healthhub::logging::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let store = match cli::load_config(&cli) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&store.get().logging);

    match cli::run(cli, store).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
