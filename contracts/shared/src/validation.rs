//! Network identity helpers
//!
//! A Soroban network is identified by the SHA-256 hash of its passphrase.
//! Both the wallet check of the dashboard and the sandbox configuration of
//! the deployment script derive it the same way.

use soroban_sdk::{Bytes, BytesN, Env};

use crate::constants::NETWORK_PASSPHRASE;

/// Network id for `passphrase`
pub fn network_id(env: &Env, passphrase: &str) -> BytesN<32> {
    env.crypto()
        .sha256(&Bytes::from_slice(env, passphrase.as_bytes()))
        .to_bytes()
}

/// Network id of the network the dashboard accepts
pub fn expected_network_id(env: &Env) -> BytesN<32> {
    network_id(env, NETWORK_PASSPHRASE)
}

/// Validate that `actual` is the expected network
///
/// # Returns
/// `Ok(())` when the ids match, `Err(actual)` otherwise
pub fn require_network(expected: &[u8; 32], actual: [u8; 32]) -> Result<(), [u8; 32]> {
    if *expected != actual {
        return Err(actual);
    }
    Ok(())
}
