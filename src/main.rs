use std::process::ExitCode;

use clap::Parser;
use disposable_email_blocker::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await.map(|_| ExitCode::SUCCESS),
        Command::Check(args) => {
            let permitted = cli::check::run(args).await?;
            Ok(if permitted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
