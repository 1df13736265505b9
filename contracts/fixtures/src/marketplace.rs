use soroban_sdk::{contract, contractimpl, Env};
use stikman_shared::interfaces::MarketplaceInterface;

use crate::storage::DataKey;

/// Flat price of every NFT (0.1 XLM)
pub const NFT_PRICE: i128 = 1_000_000;

#[contract]
pub struct FakeMarketplace;

#[contractimpl]
impl FakeMarketplace {
    /// Takes `token_id` off the market
    pub fn sell(env: Env, token_id: u32) {
        env.storage()
            .instance()
            .set(&DataKey::Sold(token_id), &true);
    }
}

#[contractimpl]
impl MarketplaceInterface for FakeMarketplace {
    fn get_price(_env: Env) -> i128 {
        NFT_PRICE
    }

    fn available(env: Env, token_id: u32) -> bool {
        !env.storage().instance().has(&DataKey::Sold(token_id))
    }
}
