//! Run command - starts the relay server

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::domain::Registry;
use crate::infrastructure::logging;
use crate::infrastructure::registry::RegistryStore;
use crate::infrastructure::relay::{RelayDispatcher, ReqwestUpstreamClient};

/// Load configuration and registry, then serve until interrupted
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let store = RegistryStore::from_override(config.registry_path.clone())?;
    let registry = store.load_or_init()?;
    info!(
        path = %store.path().display(),
        chains = registry.chains.len(),
        "Registry loaded"
    );

    let addr = build_socket_addr(&registry)?;

    let client = Arc::new(ReqwestUpstreamClient::new(&config.relay)?);
    let dispatcher = RelayDispatcher::new(Arc::new(registry), client, &config.relay);
    let app = create_router(AppState::new(Arc::new(dispatcher)));

    info!("Starting relay server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(registry: &Registry) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        registry.server.host.parse::<std::net::IpAddr>()?,
        registry.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_addr_from_defaults() {
        let registry = Registry::default();

        let addr = build_socket_addr(&registry).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8545");
    }

    #[test]
    fn test_build_socket_addr_rejects_hostname() {
        let mut registry = Registry::default();
        registry.set_server(Some("not-an-ip".to_string()), None);

        assert!(build_socket_addr(&registry).is_err());
    }
}
