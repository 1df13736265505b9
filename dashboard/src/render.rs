//! Text rendering of the dashboard page
//!
//! The page is a navigation bar, the main panel and a footer. Controls are
//! shown as bracketed labels followed by the command that triggers them.

use std::fmt::{self, Display, Formatter};

use chrono::Datelike;
use stikman_shared::constants::TREASURY_SYMBOL;

use crate::format::{format_timestamp, format_treasury, to_datetime};
use crate::proposals::{ProposalStatus, ProposalView};
use crate::state::{DashboardState, Tab};

pub const BRAND: &str = "Stikman";

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Discord", "https://discord.com/"),
    ("Twitter", "https://twitter.com/"),
    ("Instagram", "https://www.instagram.com/"),
];

pub const LOADING_NOTICE: &str = "Loading... Waiting for transaction...";
pub const NO_NFT_NOTICE: &str = "You do not own any Stikman NFTs.";
pub const NO_NFT_CONSEQUENCE: &str = "You cannot create or vote on any proposal.";
pub const NO_PROPOSALS_NOTICE: &str = "No proposals have been created.";
pub const EXECUTED_NOTICE: &str = "Proposal Executed";

const RULE_WIDTH: usize = 64;

/// The whole page for one render cycle
pub struct Page<'a> {
    state: &'a DashboardState,
    /// Ledger time the deadlines are compared against
    now: u64,
}

impl<'a> Page<'a> {
    pub fn new(state: &'a DashboardState, now: u64) -> Self {
        Self { state, now }
    }
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_navbar(f)?;
        writeln!(f)?;
        write_main(f, self.state, self.now)?;
        writeln!(f)?;
        write_footer(f, self.now)
    }
}

fn write_navbar(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    let links = SOCIAL_LINKS
        .iter()
        .map(|(name, url)| format!("{}: {}", name, url))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, " {}  |  {}", BRAND, links)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

fn write_footer(f: &mut Formatter<'_>, now: u64) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
    match to_datetime(now) {
        Some(datetime) => writeln!(
            f,
            "\u{a9} {} {}. All rights reserved.",
            datetime.year(),
            BRAND
        ),
        None => writeln!(f, "\u{a9} {}. All rights reserved.", BRAND),
    }
}

fn write_main(f: &mut Formatter<'_>, state: &DashboardState, now: u64) -> fmt::Result {
    writeln!(f, "Welcome to {}!", BRAND)?;
    writeln!(f, "Welcome to the DAO!")?;
    writeln!(f)?;
    writeln!(f, "Your {} NFT Balance: {}", BRAND, state.nft_balance)?;
    writeln!(
        f,
        "Treasury Balance: {} {}",
        format_treasury(state.treasury_balance),
        TREASURY_SYMBOL
    )?;
    writeln!(f, "Total Number of Proposals: {}", state.num_proposals)?;
    writeln!(f)?;
    writeln!(
        f,
        "[{}] [{}]    (tab create | tab view)",
        Tab::CreateProposal.title(),
        Tab::ViewProposals.title()
    )?;

    match state.selected_tab {
        Tab::None => Ok(()),
        Tab::CreateProposal => {
            writeln!(f)?;
            write_create_tab(f, state)
        }
        Tab::ViewProposals => {
            writeln!(f)?;
            write_view_tab(f, state, now)
        }
    }
}

fn write_loading(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", LOADING_NOTICE)?;
    writeln!(f, "   .   .   .")
}

fn write_create_tab(f: &mut Formatter<'_>, state: &DashboardState) -> fmt::Result {
    writeln!(f, "> {}", Tab::CreateProposal.title())?;
    if state.loading {
        return write_loading(f);
    }
    if state.nft_balance == 0 {
        writeln!(f, "{}", NO_NFT_NOTICE)?;
        return writeln!(f, "{}", NO_NFT_CONSEQUENCE);
    }

    let input = if state.nft_token_id_input.is_empty() {
        "0"
    } else {
        state.nft_token_id_input.as_str()
    };
    writeln!(f, "Fake NFT Token ID to Purchase: {}", input)?;
    writeln!(f, "[Create]    (create <token-id>)")
}

fn write_view_tab(f: &mut Formatter<'_>, state: &DashboardState, now: u64) -> fmt::Result {
    writeln!(f, "> {}", Tab::ViewProposals.title())?;
    if state.loading {
        return write_loading(f);
    }
    if state.proposals.is_empty() {
        return writeln!(f, "{}", NO_PROPOSALS_NOTICE);
    }

    for proposal in &state.proposals {
        writeln!(f)?;
        write_proposal_card(f, proposal, now)?;
    }
    Ok(())
}

fn write_proposal_card(f: &mut Formatter<'_>, proposal: &ProposalView, now: u64) -> fmt::Result {
    let id = proposal.proposal_id;
    writeln!(f, "+ Proposal ID: {}", id)?;
    writeln!(f, "  Fake NFT to Purchase (Index): {}", proposal.nft_token_id)?;
    writeln!(f, "  Deadline: {}", format_timestamp(proposal.deadline))?;
    writeln!(f, "  Yay Votes: {}", proposal.yay_votes)?;
    writeln!(f, "  Nay Votes: {}", proposal.nay_votes)?;
    writeln!(f, "  Executed?: {}", proposal.executed)?;

    match proposal.status(now) {
        ProposalStatus::Voting => writeln!(
            f,
            "  [Vote YAY] [Vote NAY]    (vote {} yay | vote {} nay)",
            id, id
        ),
        ProposalStatus::Executable { outcome } => writeln!(
            f,
            "  [Execute Proposal ({})]    (execute {})",
            outcome.label(),
            id
        ),
        ProposalStatus::Executed => writeln!(f, "  {}", EXECUTED_NOTICE),
    }
}
