//! Contract calls the dashboard makes
//!
//! `DaoGateway` is the seam between the dashboard and the chain. The
//! `ContractGateway` implementation invokes the deployed contracts through
//! their generated clients and turns every failure into a `DashboardError`.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env, InvokeError};
use stikman_shared::{DaoClient, DaoError, NftClient, ProposalRecord, Vote};

use crate::error::DashboardError;

pub trait DaoGateway {
    /// NFTs of the collection held by `owner`
    fn nft_balance(&self, owner: &Address) -> Result<u32, DashboardError>;

    /// Treasury holdings of the DAO, in stroops
    fn treasury_balance(&self) -> Result<i128, DashboardError>;

    fn num_proposals(&self) -> Result<u32, DashboardError>;

    fn proposal(&self, proposal_id: u32) -> Result<ProposalRecord, DashboardError>;

    fn create_proposal(&self, member: &Address, nft_token_id: u32) -> Result<u32, DashboardError>;

    fn vote_on_proposal(
        &self,
        member: &Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<(), DashboardError>;

    fn execute_proposal(&self, member: &Address, proposal_id: u32) -> Result<(), DashboardError>;

    /// Current ledger time in seconds
    fn ledger_time(&self) -> u64;
}

/// Addresses of the contracts the dashboard reads and writes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractAddresses {
    pub dao: Address,
    pub nft_collection: Address,
    pub treasury_token: Address,
}

pub struct ContractGateway {
    env: Env,
    addresses: ContractAddresses,
}

impl ContractGateway {
    pub fn new(env: Env, addresses: ContractAddresses) -> Self {
        Self { env, addresses }
    }

    fn dao(&self) -> DaoClient<'_> {
        DaoClient::new(&self.env, &self.addresses.dao)
    }
}

/// Flattens the nested result of a `try_` client call
pub(crate) fn settle<T, C, E>(
    outcome: Result<Result<T, C>, Result<E, InvokeError>>,
) -> Result<T, DashboardError>
where
    E: Into<DashboardError>,
{
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(DashboardError::Decode),
        Err(Ok(error)) => Err(error.into()),
        Err(Err(InvokeError::Abort)) => Err(DashboardError::Aborted),
        Err(Err(InvokeError::Contract(code))) => Err(match DaoError::from_code(code) {
            Some(error) => DashboardError::Dao(error),
            None => DashboardError::Contract(code),
        }),
    }
}

impl DaoGateway for ContractGateway {
    fn nft_balance(&self, owner: &Address) -> Result<u32, DashboardError> {
        settle(NftClient::new(&self.env, &self.addresses.nft_collection).try_balance(owner))
    }

    fn treasury_balance(&self) -> Result<i128, DashboardError> {
        settle(
            TokenClient::new(&self.env, &self.addresses.treasury_token)
                .try_balance(&self.addresses.dao),
        )
    }

    fn num_proposals(&self) -> Result<u32, DashboardError> {
        settle(self.dao().try_num_proposals())
    }

    fn proposal(&self, proposal_id: u32) -> Result<ProposalRecord, DashboardError> {
        settle(self.dao().try_proposals(&proposal_id))
    }

    fn create_proposal(&self, member: &Address, nft_token_id: u32) -> Result<u32, DashboardError> {
        settle(self.dao().try_create_proposal(member, &nft_token_id))
    }

    fn vote_on_proposal(
        &self,
        member: &Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<(), DashboardError> {
        settle(self.dao().try_vote_on_proposal(member, &proposal_id, &vote))
    }

    fn execute_proposal(&self, member: &Address, proposal_id: u32) -> Result<(), DashboardError> {
        settle(self.dao().try_execute_proposal(member, &proposal_id))
    }

    fn ledger_time(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}
