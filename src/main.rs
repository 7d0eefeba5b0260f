use std::process::ExitCode;

use aoc_fetch::{cli::Cli, error_time, info_time, process::process_days, Result};
use chrono::Local;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let start_time = Local::now();
    match run(Cli::parse()).await {
        Ok(()) => {
            info_time!(start_time, "Full program time:");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error_time!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config().await?;
    process_days(&config).await?;
    Ok(())
}
