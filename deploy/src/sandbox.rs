//! In-process Soroban host standing in for a live network
//!
//! Everything deployed into a sandbox disappears with the process, the same
//! way a local development chain forgets its state on restart.

use chrono::Utc;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};
use stikman_shared::constants::TREASURY_SEED_AMOUNT;
use stikman_shared::validation::expected_network_id;
use tracing::debug;

use crate::deploy::DeployPlan;

/// Native balance the sandbox deployer starts with (10 000 XLM)
pub const DEPLOYER_STARTING_BALANCE: i128 = 100_000_000_000;

pub struct Sandbox {
    pub env: Env,
    /// Funded account signing every sandbox transaction
    pub deployer: Address,
    /// Stand-in for the native asset contract
    pub treasury_token: Address,
}

impl Sandbox {
    /// Starts a host on the expected network, clocked at the current time,
    /// with a funded deployer account
    pub fn start() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let network_id = expected_network_id(&env).to_array();
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        env.ledger().with_mut(|ledger| {
            ledger.network_id = network_id;
            ledger.timestamp = now;
        });

        let deployer = Address::generate(&env);
        let asset = env.register_stellar_asset_contract_v2(deployer.clone());
        let treasury_token = asset.address();
        StellarAssetClient::new(&env, &treasury_token)
            .mint(&deployer, &DEPLOYER_STARTING_BALANCE);

        debug!(timestamp = now, deployer = ?deployer, "sandbox started");

        Self {
            env,
            deployer,
            treasury_token,
        }
    }

    /// Deployment inputs paying the standard treasury seed from the deployer
    pub fn plan(&self, nft_collection: Address) -> DeployPlan {
        DeployPlan {
            nft_collection,
            treasury_token: self.treasury_token.clone(),
            funder: self.deployer.clone(),
            seed_amount: TREASURY_SEED_AMOUNT,
        }
    }

    /// Moves the ledger clock forward; stops at the largest timestamp
    pub fn advance_time(&self, seconds: u64) {
        let current = self.env.ledger().timestamp();
        self.env
            .ledger()
            .set_timestamp(current.saturating_add(seconds));
    }
}
