use soroban_sdk::{contract, contractimpl, Address, Env};
use stikman_shared::interfaces::DaoInterface;
use stikman_shared::{DaoError, MarketplaceClient, NftClient, ProposalRecord, Vote};

use crate::storage::DataKey;

/// How long a proposal stays open for votes
pub const VOTING_PERIOD_SECONDS: u64 = 5 * 60;

#[contract]
pub struct FakeDao;

#[contractimpl]
impl FakeDao {
    pub fn __constructor(env: Env, marketplace: Address, nft_collection: Address) {
        env.storage()
            .instance()
            .set(&DataKey::Marketplace, &marketplace);
        env.storage()
            .instance()
            .set(&DataKey::NftCollection, &nft_collection);
    }

    pub fn marketplace(env: Env) -> Result<Address, DaoError> {
        env.storage()
            .instance()
            .get(&DataKey::Marketplace)
            .ok_or(DaoError::NotInitialized)
    }

    pub fn nft_collection(env: Env) -> Result<Address, DaoError> {
        env.storage()
            .instance()
            .get(&DataKey::NftCollection)
            .ok_or(DaoError::NotInitialized)
    }
}

fn require_member(env: &Env, member: &Address) -> Result<(), DaoError> {
    let collection = FakeDao::nft_collection(env.clone())?;
    if NftClient::new(env, &collection).balance(member) == 0 {
        return Err(DaoError::NotDaoMember);
    }
    Ok(())
}

fn load_proposal(env: &Env, proposal_id: u32) -> Result<ProposalRecord, DaoError> {
    env.storage()
        .instance()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(DaoError::ProposalNotFound)
}

fn save_proposal(env: &Env, proposal_id: u32, proposal: &ProposalRecord) {
    env.storage()
        .instance()
        .set(&DataKey::Proposal(proposal_id), proposal);
}

#[contractimpl]
impl DaoInterface for FakeDao {
    fn num_proposals(env: Env) -> Result<u32, DaoError> {
        Ok(env
            .storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .unwrap_or(0))
    }

    fn proposals(env: Env, proposal_id: u32) -> Result<ProposalRecord, DaoError> {
        load_proposal(&env, proposal_id)
    }

    // -------------------------------
    // Proposal Creation
    // -------------------------------
    fn create_proposal(env: Env, member: Address, nft_token_id: u32) -> Result<u32, DaoError> {
        member.require_auth();
        require_member(&env, &member)?;

        let marketplace = Self::marketplace(env.clone())?;
        if !MarketplaceClient::new(&env, &marketplace).available(&nft_token_id) {
            return Err(DaoError::NftNotForSale);
        }

        let id = Self::num_proposals(env.clone())?;
        let proposal = ProposalRecord {
            nft_token_id,
            deadline: env.ledger().timestamp() + VOTING_PERIOD_SECONDS,
            yay_votes: 0,
            nay_votes: 0,
            executed: false,
        };

        save_proposal(&env, id, &proposal);
        env.storage()
            .instance()
            .set(&DataKey::ProposalCount, &(id + 1));

        Ok(id)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    fn vote_on_proposal(
        env: Env,
        member: Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<(), DaoError> {
        member.require_auth();
        require_member(&env, &member)?;

        let mut proposal = load_proposal(&env, proposal_id)?;
        if env.ledger().timestamp() >= proposal.deadline {
            return Err(DaoError::DeadlineExceeded);
        }

        let vote_key = DataKey::Vote(proposal_id, member);
        if env.storage().instance().has(&vote_key) {
            return Err(DaoError::AlreadyVoted);
        }

        match vote {
            Vote::Yay => proposal.yay_votes += 1,
            Vote::Nay => proposal.nay_votes += 1,
        }

        env.storage().instance().set(&vote_key, &vote);
        save_proposal(&env, proposal_id, &proposal);
        Ok(())
    }

    fn execute_proposal(env: Env, member: Address, proposal_id: u32) -> Result<(), DaoError> {
        member.require_auth();
        require_member(&env, &member)?;

        let mut proposal = load_proposal(&env, proposal_id)?;
        if env.ledger().timestamp() < proposal.deadline {
            return Err(DaoError::DeadlineNotExceeded);
        }
        if proposal.executed {
            return Err(DaoError::AlreadyExecuted);
        }

        proposal.executed = true;
        save_proposal(&env, proposal_id, &proposal);
        Ok(())
    }
}
