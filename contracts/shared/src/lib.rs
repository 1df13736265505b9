#![no_std]
//! # Stikman DAO shared library
//!
//! The contract surface the Stikman dashboard and deployment tooling talk to.
//! The DAO, NFT collection and marketplace contracts themselves live on chain;
//! this crate only carries their interfaces, the types crossing them and the
//! network configuration both off-chain tools agree on.
//!
//! ## Modules
//!
//! - `interfaces` - `#[contractclient]` traits for the DAO, NFT and marketplace contracts
//! - `types` - Proposal record and vote choice as stored by the DAO
//! - `errors` - Error codes the DAO contract reports
//! - `constants` - Network, treasury and address configuration
//! - `validation` - Network id derivation and checks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stikman_shared::interfaces::DaoClient;
//! use stikman_shared::types::Vote;
//!
//! let dao = DaoClient::new(&env, &dao_address);
//! dao.vote_on_proposal(&member, &0, &Vote::from_label("YAY"));
//! ```

pub mod constants;
pub mod errors;
pub mod interfaces;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use errors::DaoError;
pub use interfaces::{DaoClient, MarketplaceClient, NftClient};
pub use types::{ProposalRecord, Vote};
pub use validation::{network_id, require_network};
