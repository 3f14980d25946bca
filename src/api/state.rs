//! Shared application state

use std::sync::Arc;

use crate::infrastructure::relay::RelayDispatcher;

/// State shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayDispatcher>,
}

impl AppState {
    pub fn new(relay: Arc<RelayDispatcher>) -> Self {
        Self { relay }
    }
}
