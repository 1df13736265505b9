//! The dashboard controller
//!
//! `Dashboard` owns the page state and is the only thing that mutates it.
//! Reads log their failures and leave the previous value in place. Writes
//! show a blocking alert with the failure message. A wrong network is
//! alerted on both paths.

use stikman_shared::Vote;
use tracing::{error, info};

use crate::alerts::Alerts;
use crate::error::DashboardError;
use crate::gateway::DaoGateway;
use crate::proposals;
use crate::render::Page;
use crate::session::{Session, Signer, Wallet};
use crate::state::{DashboardState, Tab};

pub struct Dashboard<W, G, A> {
    session: Session<W, G>,
    alerts: A,
    state: DashboardState,
}

impl<W: Wallet, G: DaoGateway, A: Alerts> Dashboard<W, G, A> {
    pub fn new(session: Session<W, G>, alerts: A) -> Self {
        Self {
            session,
            alerts,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn session(&self) -> &Session<W, G> {
        &self.session
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    /// Runs on the first render. Connects the wallet unless it is already
    /// connected, then loads the header values. Each of the three reads
    /// fails on its own.
    pub fn start(&mut self) {
        if self.state.wallet_connected {
            return;
        }
        if !self.connect_wallet() {
            return;
        }
        self.get_user_nft_balance();
        self.get_dao_treasury_balance();
        self.get_num_proposals_in_dao();
    }

    /// Returns whether the wallet ended up connected
    pub fn connect_wallet(&mut self) -> bool {
        match self.session.connect() {
            Ok(_) => {
                self.state.wallet_connected = true;
                true
            }
            Err(error) => {
                self.report_read_failure("connect wallet", &error);
                false
            }
        }
    }

    pub fn get_user_nft_balance(&mut self) {
        match self.session.signer().and_then(|signer| signer.nft_balance()) {
            Ok(balance) => self.state.nft_balance = balance,
            Err(error) => self.report_read_failure("read NFT balance", &error),
        }
    }

    pub fn get_dao_treasury_balance(&mut self) {
        match self
            .session
            .provider()
            .and_then(|gateway| gateway.treasury_balance())
        {
            Ok(balance) => self.state.treasury_balance = balance,
            Err(error) => self.report_read_failure("read treasury balance", &error),
        }
    }

    pub fn get_num_proposals_in_dao(&mut self) {
        match self
            .session
            .provider()
            .and_then(|gateway| gateway.num_proposals())
        {
            Ok(count) => self.state.num_proposals = count,
            Err(error) => self.report_read_failure("read proposal count", &error),
        }
    }

    /// Refreshes the proposal count, then replaces the list with proposals
    /// `0..count`. On failure the previous list stays.
    pub fn fetch_all_proposals(&mut self) {
        self.get_num_proposals_in_dao();
        let count = self.state.num_proposals;
        match self
            .session
            .provider()
            .and_then(|gateway| proposals::fetch_all_proposals(gateway, count))
        {
            Ok(list) => self.state.proposals = list,
            Err(error) => self.report_read_failure("fetch proposals", &error),
        }
    }

    /// Reloads the header values, and the list when it is on screen
    pub fn refresh(&mut self) {
        self.get_user_nft_balance();
        self.get_dao_treasury_balance();
        if self.state.selected_tab == Tab::ViewProposals {
            self.fetch_all_proposals();
        } else {
            self.get_num_proposals_in_dao();
        }
    }

    /// Switching to the proposals tab reloads the list
    pub fn select_tab(&mut self, tab: Tab) {
        self.state.selected_tab = tab;
        if tab == Tab::ViewProposals {
            self.fetch_all_proposals();
        }
    }

    pub fn set_nft_token_id_input(&mut self, input: impl Into<String>) {
        self.state.nft_token_id_input = input.into();
    }

    /// Proposes buying the NFT typed into the token id field. Returns the
    /// new proposal id once the transaction is confirmed.
    pub fn create_proposal(&mut self) -> Option<u32> {
        let input = self.state.nft_token_id_input.trim();
        let nft_token_id = match input.parse::<u32>() {
            Ok(id) => id,
            Err(_) => {
                let error = DashboardError::InvalidTokenId(input.to_string());
                self.report_write_failure("create proposal", &error);
                return None;
            }
        };

        let proposal_id = self.submit("create proposal", |signer| {
            signer.create_proposal(nft_token_id)
        })?;
        self.get_num_proposals_in_dao();
        Some(proposal_id)
    }

    /// `label` is `"YAY"` for a yes vote; anything else votes no
    pub fn vote_on_proposal(&mut self, proposal_id: u32, label: &str) -> bool {
        let vote = Vote::from_label(label);
        let confirmed = self
            .submit("vote on proposal", |signer| {
                signer.vote_on_proposal(proposal_id, vote)
            })
            .is_some();
        if confirmed {
            self.fetch_all_proposals();
        }
        confirmed
    }

    pub fn execute_proposal(&mut self, proposal_id: u32) -> bool {
        let confirmed = self
            .submit("execute proposal", |signer| {
                signer.execute_proposal(proposal_id)
            })
            .is_some();
        if confirmed {
            self.fetch_all_proposals();
        }
        confirmed
    }

    pub fn render(&self) -> Page<'_> {
        Page::new(&self.state, self.session.gateway().ledger_time())
    }

    /// Sends one transaction with the loading flag raised until it settles
    fn submit<T>(
        &mut self,
        action: &'static str,
        send: impl FnOnce(&Signer<'_, G>) -> Result<T, DashboardError>,
    ) -> Option<T> {
        let signer = match self.session.signer() {
            Ok(signer) => signer,
            Err(error) => {
                self.report_write_failure(action, &error);
                return None;
            }
        };

        self.state.loading = true;
        self.alerts.pending(&self.render());
        let outcome = send(&signer);
        self.state.loading = false;

        match outcome {
            Ok(value) => {
                info!(action, account = ?signer.account(), "transaction confirmed");
                Some(value)
            }
            Err(error) => {
                self.report_write_failure(action, &error);
                None
            }
        }
    }

    fn report_read_failure(&self, action: &'static str, failure: &DashboardError) {
        error!(action, error = %failure, "read failed");
        if *failure == DashboardError::WrongNetwork {
            self.alerts.alert(&failure.to_string());
        }
    }

    fn report_write_failure(&self, action: &'static str, failure: &DashboardError) {
        error!(action, error = %failure, "transaction failed");
        self.alerts.alert(&failure.to_string());
    }
}
