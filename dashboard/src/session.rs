//! Wallet connection and the read/write handles derived from it
//!
//! Every handle is re-issued per call: the wallet may have switched
//! networks since the last one, so the network is checked each time.

use soroban_sdk::{Address, Env};
use stikman_shared::validation::require_network;
use stikman_shared::Vote;
use tracing::{info, warn};

use crate::error::DashboardError;
use crate::gateway::DaoGateway;

/// A wallet the user connects to the dashboard
pub trait Wallet {
    /// Asks the user to share an account; the user may refuse
    fn request_account(&mut self) -> Result<Address, DashboardError>;

    /// Id of the network the wallet is currently on
    fn network_id(&self) -> [u8; 32];
}

/// Wallet bound to a Soroban host, holding one account
pub struct LedgerWallet {
    env: Env,
    account: Address,
    approves: bool,
}

impl LedgerWallet {
    pub fn new(env: Env, account: Address) -> Self {
        Self {
            env,
            account,
            approves: true,
        }
    }

    /// Makes the wallet refuse connection requests
    pub fn refusing(mut self) -> Self {
        self.approves = false;
        self
    }
}

impl Wallet for LedgerWallet {
    fn request_account(&mut self) -> Result<Address, DashboardError> {
        if !self.approves {
            return Err(DashboardError::ConnectionRejected);
        }
        Ok(self.account.clone())
    }

    fn network_id(&self) -> [u8; 32] {
        self.env.ledger().network_id().to_array()
    }
}

pub struct Session<W, G> {
    wallet: W,
    gateway: G,
    expected_network: [u8; 32],
    account: Option<Address>,
}

impl<W: Wallet, G: DaoGateway> Session<W, G> {
    pub fn new(wallet: W, gateway: G, expected_network: [u8; 32]) -> Self {
        Self {
            wallet,
            gateway,
            expected_network,
            account: None,
        }
    }

    pub fn connect(&mut self) -> Result<Address, DashboardError> {
        let account = self.wallet.request_account()?;
        self.check_network()?;
        info!(account = ?account, "wallet connected");
        self.account = Some(account.clone());
        Ok(account)
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&Address> {
        self.account.as_ref()
    }

    /// Read-only access to the contracts
    pub fn provider(&self) -> Result<&G, DashboardError> {
        self.check_network()?;
        Ok(&self.gateway)
    }

    /// Write access to the contracts on behalf of the connected account
    pub fn signer(&self) -> Result<Signer<'_, G>, DashboardError> {
        self.check_network()?;
        let account = self.account.as_ref().ok_or(DashboardError::NotConnected)?;
        Ok(Signer {
            gateway: &self.gateway,
            account,
        })
    }

    #[cfg(test)]
    pub(crate) fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    /// Unchecked access, for values that do not depend on the network
    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    fn check_network(&self) -> Result<(), DashboardError> {
        require_network(&self.expected_network, self.wallet.network_id()).map_err(|actual| {
            warn!(?actual, "wallet is on an unexpected network");
            DashboardError::WrongNetwork
        })
    }
}

/// Submits transactions as the connected account
pub struct Signer<'a, G> {
    gateway: &'a G,
    account: &'a Address,
}

impl<'a, G: DaoGateway> Signer<'a, G> {
    pub fn account(&self) -> &Address {
        self.account
    }

    /// Stikman NFTs held by the connected account
    pub fn nft_balance(&self) -> Result<u32, DashboardError> {
        self.gateway.nft_balance(self.account)
    }

    pub fn create_proposal(&self, nft_token_id: u32) -> Result<u32, DashboardError> {
        self.gateway.create_proposal(self.account, nft_token_id)
    }

    pub fn vote_on_proposal(&self, proposal_id: u32, vote: Vote) -> Result<(), DashboardError> {
        self.gateway.vote_on_proposal(self.account, proposal_id, vote)
    }

    pub fn execute_proposal(&self, proposal_id: u32) -> Result<(), DashboardError> {
        self.gateway.execute_proposal(self.account, proposal_id)
    }
}
