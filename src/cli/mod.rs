//! CLI module for RPC Relay
//!
//! Provides subcommands for the two halves of the tool:
//! - `run`: start the relay server
//! - `registry`: inspect and edit the persisted chain registry

pub mod registry;
pub mod run;

use clap::{Parser, Subcommand};

/// RPC Relay - races JSON-RPC requests across configured upstream endpoints
#[derive(Parser)]
#[command(name = "rpc-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the relay server
    Run,

    /// Inspect and edit the chain registry
    Registry(registry::RegistryArgs),
}
