//! Interfaces of the contracts the dashboard and deployment script call
//!
//! Each trait generates a typed client (`DaoClient`, `NftClient`,
//! `MarketplaceClient`) with a panicking and a `try_` variant per function.
//! Contracts implementing these traits are interchangeable from the client's
//! point of view.

use soroban_sdk::{contractclient, Address, Env};

use crate::errors::DaoError;
use crate::types::{ProposalRecord, Vote};

/// Stikman DAO contract
#[contractclient(name = "DaoClient")]
pub trait DaoInterface {
    /// Number of proposals created so far; ids run from `0` to this value
    fn num_proposals(env: Env) -> Result<u32, DaoError>;

    fn proposals(env: Env, proposal_id: u32) -> Result<ProposalRecord, DaoError>;

    /// Opens a proposal to buy `nft_token_id`; returns the new proposal id
    fn create_proposal(env: Env, member: Address, nft_token_id: u32) -> Result<u32, DaoError>;

    fn vote_on_proposal(
        env: Env,
        member: Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<(), DaoError>;

    fn execute_proposal(env: Env, member: Address, proposal_id: u32) -> Result<(), DaoError>;
}

/// Stikman NFT collection
#[contractclient(name = "NftClient")]
pub trait NftInterface {
    /// Number of tokens held by `owner`
    fn balance(env: Env, owner: Address) -> u32;
}

/// Marketplace the DAO buys from
#[contractclient(name = "MarketplaceClient")]
pub trait MarketplaceInterface {
    /// Price of any NFT, in stroops
    fn get_price(env: Env) -> i128;

    fn available(env: Env, token_id: u32) -> bool;
}
