#![no_std]
//! Stand-in contracts for exercising the Stikman client code against a real
//! Soroban host. They implement the shared interfaces with just enough
//! behaviour to drive the dashboard through each proposal state; the real
//! DAO, NFT collection and marketplace are deployed separately.

mod dao;
mod marketplace;
mod nft;
mod storage;

pub use dao::{FakeDao, FakeDaoClient, VOTING_PERIOD_SECONDS};
pub use marketplace::{FakeMarketplace, FakeMarketplaceClient, NFT_PRICE};
pub use nft::{FakeNft, FakeNftClient};
