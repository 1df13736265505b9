use soroban_sdk::{contract, contractimpl, Address, Env};
use stikman_shared::interfaces::NftInterface;

use crate::storage::DataKey;

#[contract]
pub struct FakeNft;

#[contractimpl]
impl FakeNft {
    /// Mints the next token to `to` and returns its id
    pub fn mint(env: Env, to: Address) -> u32 {
        let token_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0);
        let balance = Self::balance(env.clone(), to.clone());

        env.storage()
            .instance()
            .set(&DataKey::Balance(to), &(balance + 1));
        env.storage()
            .instance()
            .set(&DataKey::NextTokenId, &(token_id + 1));

        token_id
    }
}

#[contractimpl]
impl NftInterface for FakeNft {
    fn balance(env: Env, owner: Address) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }
}
