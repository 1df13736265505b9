use crate::proposals::ProposalView;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    None,
    CreateProposal,
    ViewProposals,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::None => "",
            Tab::CreateProposal => "Create Proposal",
            Tab::ViewProposals => "View Proposals",
        }
    }
}

/// Everything the page renders from; owned and mutated by `Dashboard` only
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Treasury holdings in stroops
    pub treasury_balance: i128,
    pub num_proposals: u32,
    pub proposals: Vec<ProposalView>,
    pub nft_balance: u32,
    /// Raw text of the token id field on the Create tab
    pub nft_token_id_input: String,
    pub selected_tab: Tab,
    /// A transaction is waiting for confirmation
    pub loading: bool,
    pub wallet_connected: bool,
}
