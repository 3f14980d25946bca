//! Chain entity: a relayed network and its upstream endpoints

mod entity;
mod validation;

pub use entity::{Chain, ChainId};
pub use validation::{validate_chain_id, ChainValidationError, MAX_CHAIN_ID_LENGTH};
