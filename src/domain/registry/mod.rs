//! Registry: persisted chain set plus server bind settings

mod entity;

pub use entity::{Registry, ServerConfig};
