use soroban_sdk::{contracttype, Address};

#[contracttype]
pub enum DataKey {
    Marketplace,
    NftCollection,
    Proposal(u32),
    ProposalCount,
    Vote(u32, Address), // (proposal_id, voter)
    Balance(Address),
    NextTokenId,
    Sold(u32),
}
