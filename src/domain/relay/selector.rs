//! Candidate selection: secure-scheme filtering and random ordering

use rand::seq::SliceRandom;

use crate::domain::chain::Chain;

/// Only endpoints carrying this scheme prefix are ever dialed. Plaintext
/// endpoints in the registry are skipped, not downgraded.
pub const SECURE_SCHEME_PREFIX: &str = "https";

/// Build the candidate set for one dispatch: copy the chain's endpoint list,
/// keep secure-transport URLs, and apply a uniform random permutation.
///
/// Each dispatch gets an independent ordering; there is no weighting and no
/// memory of previous dispatches. An empty result means the chain has no
/// usable endpoints.
pub fn select_candidates(chain: &Chain) -> Vec<String> {
    let mut candidates: Vec<String> = chain
        .rpc
        .iter()
        .filter(|url| url.starts_with(SECURE_SCHEME_PREFIX))
        .cloned()
        .collect();

    candidates.shuffle(&mut rand::thread_rng());
    candidates
}
