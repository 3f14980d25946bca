use clap::Parser;
use rpc_relay::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run => cli::run::run().await,
        Command::Registry(args) => cli::registry::run(args).await,
    }
}
