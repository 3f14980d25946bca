//! Registry persistence

mod store;

pub use store::{default_registry_path, RegistryStore};
