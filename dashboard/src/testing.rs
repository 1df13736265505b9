//! In-memory stand-ins for unit tests

use std::cell::{Cell, RefCell};

use soroban_sdk::Address;
use stikman_shared::{DaoError, ProposalRecord, Vote};

use crate::alerts::Alerts;
use crate::render::Page;
use crate::error::DashboardError;
use crate::gateway::DaoGateway;
use crate::session::Wallet;

pub const NETWORK: [u8; 32] = [7u8; 32];

pub struct FakeGateway {
    pub proposals: RefCell<Vec<ProposalRecord>>,
    pub nft_balance: Cell<u32>,
    pub treasury: Cell<i128>,
    pub now: Cell<u64>,
    /// When set, every write fails with this error
    pub reject_writes: Cell<Option<DaoError>>,
    /// When set, every read fails with this error
    pub fail_reads: Cell<Option<DaoError>>,
    /// Fails only the NFT balance read
    pub fail_nft_balance: Cell<bool>,
    /// Fails only the treasury balance read
    pub fail_treasury: Cell<bool>,
    reads: RefCell<Vec<u32>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            proposals: RefCell::new(Vec::new()),
            nft_balance: Cell::new(0),
            treasury: Cell::new(0),
            now: Cell::new(1_000),
            reject_writes: Cell::new(None),
            fail_reads: Cell::new(None),
            fail_nft_balance: Cell::new(false),
            fail_treasury: Cell::new(false),
            reads: RefCell::new(Vec::new()),
        }
    }

    /// `count` open proposals for tokens `100..100 + count`
    pub fn with_proposals(count: u32, deadline: u64) -> Self {
        let gateway = Self::new();
        gateway.proposals.replace(
            (0..count)
                .map(|index| ProposalRecord {
                    nft_token_id: 100 + index,
                    deadline,
                    yay_votes: 0,
                    nay_votes: 0,
                    executed: false,
                })
                .collect(),
        );
        gateway
    }

    /// Ids passed to `proposal`, in call order
    pub fn proposal_reads(&self) -> Vec<u32> {
        self.reads.borrow().clone()
    }

    fn check_read(&self) -> Result<(), DashboardError> {
        match self.fail_reads.get() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> Result<(), DashboardError> {
        match self.reject_writes.get() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

impl DaoGateway for FakeGateway {
    fn nft_balance(&self, _owner: &Address) -> Result<u32, DashboardError> {
        self.check_read()?;
        if self.fail_nft_balance.get() {
            return Err(DashboardError::Aborted);
        }
        Ok(self.nft_balance.get())
    }

    fn treasury_balance(&self) -> Result<i128, DashboardError> {
        self.check_read()?;
        if self.fail_treasury.get() {
            return Err(DashboardError::Aborted);
        }
        Ok(self.treasury.get())
    }

    fn num_proposals(&self) -> Result<u32, DashboardError> {
        self.check_read()?;
        Ok(self.proposals.borrow().len() as u32)
    }

    fn proposal(&self, proposal_id: u32) -> Result<ProposalRecord, DashboardError> {
        self.reads.borrow_mut().push(proposal_id);
        self.check_read()?;
        self.proposals
            .borrow()
            .get(proposal_id as usize)
            .cloned()
            .ok_or(DashboardError::Dao(DaoError::ProposalNotFound))
    }

    fn create_proposal(&self, _member: &Address, nft_token_id: u32) -> Result<u32, DashboardError> {
        self.check_write()?;
        let mut proposals = self.proposals.borrow_mut();
        proposals.push(ProposalRecord {
            nft_token_id,
            deadline: self.now.get() + 300,
            yay_votes: 0,
            nay_votes: 0,
            executed: false,
        });
        Ok(proposals.len() as u32 - 1)
    }

    fn vote_on_proposal(
        &self,
        _member: &Address,
        proposal_id: u32,
        vote: Vote,
    ) -> Result<(), DashboardError> {
        self.check_write()?;
        let mut proposals = self.proposals.borrow_mut();
        let proposal = proposals
            .get_mut(proposal_id as usize)
            .ok_or(DashboardError::Dao(DaoError::ProposalNotFound))?;
        match vote {
            Vote::Yay => proposal.yay_votes += 1,
            Vote::Nay => proposal.nay_votes += 1,
        }
        Ok(())
    }

    fn execute_proposal(&self, _member: &Address, proposal_id: u32) -> Result<(), DashboardError> {
        self.check_write()?;
        let mut proposals = self.proposals.borrow_mut();
        let proposal = proposals
            .get_mut(proposal_id as usize)
            .ok_or(DashboardError::Dao(DaoError::ProposalNotFound))?;
        proposal.executed = true;
        Ok(())
    }

    fn ledger_time(&self) -> u64 {
        self.now.get()
    }
}

pub struct FakeWallet {
    pub account: Address,
    pub network: [u8; 32],
    pub approves: bool,
}

impl Wallet for FakeWallet {
    fn request_account(&mut self) -> Result<Address, DashboardError> {
        if !self.approves {
            return Err(DashboardError::ConnectionRejected);
        }
        Ok(self.account.clone())
    }

    fn network_id(&self) -> [u8; 32] {
        self.network
    }
}

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
