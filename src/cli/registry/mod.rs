//! Registry command - CRUD over the persisted chain registry
//!
//! Mutations load the document, apply one change and save it back. The
//! server only reads the file at startup, so edits take effect on the next
//! `run` (single-writer, offline-editing model).

use clap::{Args, Subcommand};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::domain::{Chain, ChainId, Registry};
use crate::infrastructure::registry::RegistryStore;

/// Base URL for the ethereum-lists chain metadata used by `--chainlist`
const CHAINLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/ethereum-lists/chains/master/_data/chains";

#[derive(Args)]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommand,
}

#[derive(Subcommand)]
pub enum RegistryCommand {
    /// Print the configured chains and server settings
    Show,

    /// Add a chain
    AddChain {
        chain_id: String,
        /// Display name for the chain
        #[arg(long, required_unless_present = "chainlist")]
        name: Option<String>,
        /// Initialize name and RPC list from chainlist.org data
        #[arg(long, conflicts_with = "name")]
        chainlist: bool,
    },

    /// Change a chain's name or identifier
    EditChain {
        chain_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        new_id: Option<String>,
    },

    /// Remove a chain
    RemoveChain { chain_id: String },

    /// Append an RPC URL to a chain
    AddRpc { chain_id: String, url: String },

    /// Remove an RPC URL from a chain
    RemoveRpc { chain_id: String, url: String },

    /// Change server bind settings
    SetServer {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

pub async fn run(args: RegistryArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    let store = RegistryStore::from_override(config.registry_path.clone())?;
    let mut registry = store.load_or_init()?;

    match args.command {
        RegistryCommand::Show => {
            print_registry(&registry);
            return Ok(());
        }
        RegistryCommand::AddChain {
            chain_id,
            name,
            chainlist,
        } => {
            let chain_id = ChainId::new(chain_id)?;
            let chain = if chainlist {
                fetch_chain_metadata(CHAINLIST_BASE_URL, &chain_id).await?
            } else {
                let name = name.ok_or_else(|| anyhow::anyhow!("--name is required"))?;
                Chain::new(chain_id, name)
            };
            let label = format!("{} ({})", chain.name, chain.chain_id);
            registry.add_chain(chain)?;
            println!("Added chain {}", label);
        }
        RegistryCommand::EditChain {
            chain_id,
            name,
            new_id,
        } => {
            let chain_id = ChainId::new(chain_id)?;
            let new_id = new_id.map(ChainId::new).transpose()?;
            registry.edit_chain(&chain_id, new_id, name)?;
            println!("Updated chain {}", chain_id);
        }
        RegistryCommand::RemoveChain { chain_id } => {
            let chain_id = ChainId::new(chain_id)?;
            let removed = registry.remove_chain(&chain_id)?;
            println!("Removed chain {} ({})", removed.name, removed.chain_id);
        }
        RegistryCommand::AddRpc { chain_id, url } => {
            let chain_id = ChainId::new(chain_id)?;
            registry.add_rpc(&chain_id, url.clone())?;
            println!("Added RPC {} to chain {}", url, chain_id);
        }
        RegistryCommand::RemoveRpc { chain_id, url } => {
            let chain_id = ChainId::new(chain_id)?;
            registry.remove_rpc(&chain_id, &url)?;
            println!("Removed RPC {} from chain {}", url, chain_id);
        }
        RegistryCommand::SetServer { host, port } => {
            registry.set_server(host, port);
            println!(
                "Server set to {}:{}",
                registry.server.host, registry.server.port
            );
        }
    }

    store.save(&registry)?;
    Ok(())
}

fn print_registry(registry: &Registry) {
    println!("Server: {}:{}", registry.server.host, registry.server.port);

    if registry.chains.is_empty() {
        println!("No chains configured");
        return;
    }

    println!("Chains:");
    for chain in &registry.chains {
        println!("  {} ({}) - {} RPCs", chain.name, chain.chain_id, chain.rpc.len());
        for url in &chain.rpc {
            println!("    {}", url);
        }
    }
}

/// Chain metadata document as published by ethereum-lists
#[derive(Debug, Deserialize)]
struct ChainlistEntry {
    name: String,
    #[serde(default)]
    rpc: Vec<String>,
}

async fn fetch_chain_metadata(base_url: &str, chain_id: &ChainId) -> anyhow::Result<Chain> {
    let url = format!("{}/eip155-{}.json", base_url, chain_id);
    let entry: ChainlistEntry = reqwest::get(&url)
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(Chain::new(chain_id.clone(), entry.name).with_rpc(entry.rpc))
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_chainlist_entry_deserialization() {
        let entry: ChainlistEntry = serde_json::from_str(
            r#"{
                "name": "Ethereum Mainnet",
                "chain": "ETH",
                "rpc": ["https://rpc.example", "wss://ws.example"],
                "chainId": 1
            }"#,
        )
        .unwrap();

        assert_eq!(entry.name, "Ethereum Mainnet");
        assert_eq!(entry.rpc.len(), 2);
    }

    #[test]
    fn test_chainlist_entry_defaults_missing_rpc() {
        let entry: ChainlistEntry =
            serde_json::from_str(r#"{"name": "Bare Chain"}"#).unwrap();
        assert!(entry.rpc.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_chain_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/eip155-137.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"name": "Polygon Mainnet", "rpc": ["https://polygon-rpc.example"]}"#,
            ))
            .mount(&server)
            .await;

        let chain_id = ChainId::new("137").unwrap();
        let chain = fetch_chain_metadata(&server.uri(), &chain_id).await.unwrap();

        assert_eq!(chain.name, "Polygon Mainnet");
        assert_eq!(chain.rpc, vec!["https://polygon-rpc.example".to_string()]);
        assert_eq!(chain.chain_id, chain_id);
    }

    #[tokio::test]
    async fn test_fetch_chain_metadata_unknown_chain_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let chain_id = ChainId::new("999999").unwrap();
        assert!(fetch_chain_metadata(&server.uri(), &chain_id).await.is_err());
    }
}
