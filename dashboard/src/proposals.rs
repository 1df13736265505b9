//! Proposal view-model and the sequential list fetch

use stikman_shared::{ProposalRecord, Vote};
use tracing::debug;

use crate::error::DashboardError;
use crate::gateway::DaoGateway;

/// Snapshot of one proposal, replaced on every fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalView {
    pub proposal_id: u32,
    pub nft_token_id: u32,
    /// Ledger timestamp (seconds) at which voting closes
    pub deadline: u64,
    pub yay_votes: u32,
    pub nay_votes: u32,
    pub executed: bool,
}

/// What the dashboard offers for a proposal
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProposalStatus {
    /// Deadline ahead, not executed: members can vote
    Voting,
    /// Deadline reached, not executed: anyone holding an NFT can execute
    Executable { outcome: Vote },
    Executed,
}

impl ProposalView {
    pub fn from_record(proposal_id: u32, record: ProposalRecord) -> Self {
        Self {
            proposal_id,
            nft_token_id: record.nft_token_id,
            deadline: record.deadline,
            yay_votes: record.yay_votes,
            nay_votes: record.nay_votes,
            executed: record.executed,
        }
    }

    /// Vote that would win if the proposal were executed now; ties lose
    pub fn leading_vote(&self) -> Vote {
        if self.yay_votes > self.nay_votes {
            Vote::Yay
        } else {
            Vote::Nay
        }
    }

    /// Voting closes at the deadline itself
    pub fn status(&self, now: u64) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if self.deadline > now {
            ProposalStatus::Voting
        } else {
            ProposalStatus::Executable {
                outcome: self.leading_vote(),
            }
        }
    }
}

pub fn fetch_proposal_by_id<G: DaoGateway>(
    gateway: &G,
    proposal_id: u32,
) -> Result<ProposalView, DashboardError> {
    let record = gateway.proposal(proposal_id)?;
    Ok(ProposalView::from_record(proposal_id, record))
}

/// Reads proposals `0..count` one after another, in id order. The first
/// failed read aborts the fetch.
pub fn fetch_all_proposals<G: DaoGateway>(
    gateway: &G,
    count: u32,
) -> Result<Vec<ProposalView>, DashboardError> {
    let mut proposals = Vec::with_capacity(count as usize);
    for proposal_id in 0..count {
        proposals.push(fetch_proposal_by_id(gateway, proposal_id)?);
    }
    debug!(count, "fetched proposals");
    Ok(proposals)
}
