use std::cell::RefCell;

use soroban_sdk::Address;
use stikman_dashboard::render::Page;
use stikman_dashboard::{
    Alerts, ContractAddresses, ContractGateway, Dashboard, LedgerWallet, Session,
};
use stikman_deploy::{deploy, Deployment, Sandbox};
use stikman_fixtures::{FakeDao, FakeMarketplace, FakeMarketplaceClient, FakeNft, FakeNftClient};
use stikman_shared::validation::expected_network_id;

pub type TestDashboard = Dashboard<LedgerWallet, ContractGateway, RecordingAlerts>;

#[derive(Default)]
pub struct RecordingAlerts {
    messages: RefCell<Vec<String>>,
    pending_pages: RefCell<Vec<String>>,
}

impl RecordingAlerts {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Pages shown while transactions were waiting, in order
    pub fn pending_pages(&self) -> Vec<String> {
        self.pending_pages.borrow().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn pending(&self, page: &Page<'_>) {
        self.pending_pages.borrow_mut().push(page.to_string());
    }
}

/// Sandbox with the stand-in contracts deployed the way the deploy script
/// deploys the real ones
pub struct TestEnvironment {
    pub sandbox: Sandbox,
    pub nft_collection: Address,
    pub deployment: Deployment,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let sandbox = Sandbox::start();
        let nft_collection = sandbox.env.register(FakeNft, ());
        let deployment = deploy(
            &sandbox.env,
            FakeMarketplace,
            FakeDao,
            &sandbox.plan(nft_collection.clone()),
        )
        .unwrap();

        Self {
            sandbox,
            nft_collection,
            deployment,
        }
    }

    pub fn mint_to(&self, owner: &Address) -> u32 {
        FakeNftClient::new(&self.sandbox.env, &self.nft_collection).mint(owner)
    }

    pub fn sell(&self, token_id: u32) {
        FakeMarketplaceClient::new(&self.sandbox.env, &self.deployment.marketplace).sell(&token_id);
    }

    pub fn wallet(&self) -> LedgerWallet {
        LedgerWallet::new(self.sandbox.env.clone(), self.sandbox.deployer.clone())
    }

    pub fn dashboard(&self, wallet: LedgerWallet) -> TestDashboard {
        let gateway = ContractGateway::new(
            self.sandbox.env.clone(),
            ContractAddresses {
                dao: self.deployment.dao.clone(),
                nft_collection: self.nft_collection.clone(),
                treasury_token: self.sandbox.treasury_token.clone(),
            },
        );
        let session = Session::new(
            wallet,
            gateway,
            expected_network_id(&self.sandbox.env).to_array(),
        );
        Dashboard::new(session, RecordingAlerts::default())
    }
}
