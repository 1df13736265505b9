use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::TokenClient;
use soroban_sdk::Address;
use stikman_deploy::{DeployPlan, Sandbox};

pub struct TestEnvironment {
    pub sandbox: Sandbox,
    pub nft_collection: Address,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let sandbox = Sandbox::start();
        let nft_collection = Address::generate(&sandbox.env);

        Self {
            sandbox,
            nft_collection,
        }
    }

    pub fn plan(&self) -> DeployPlan {
        self.sandbox.plan(self.nft_collection.clone())
    }

    pub fn balance(&self, account: &Address) -> i128 {
        TokenClient::new(&self.sandbox.env, &self.sandbox.treasury_token).balance(account)
    }
}
