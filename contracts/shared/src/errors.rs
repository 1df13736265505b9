//! Error codes reported by the Stikman DAO contract
//!
//! The codes are part of the contract interface: the dashboard decodes them
//! from failed invocations and shows the matching message to the user.

use soroban_sdk::contracterror;

/// Errors the DAO contract can return
///
/// Error ranges are organized by category:
/// - 1-9: Membership errors
/// - 10-19: Proposal lookup and creation errors
/// - 20-29: Voting errors
/// - 30-39: Execution errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DaoError {
    // ===== Membership Errors (1-9) =====
    /// Caller holds no NFT of the collection
    NotDaoMember = 1,

    /// Contract was not constructed with its collaborators
    NotInitialized = 2,

    // ===== Proposal Errors (10-19) =====
    /// No proposal exists with the requested id
    ProposalNotFound = 10,

    /// The marketplace no longer offers the requested NFT
    NftNotForSale = 11,

    // ===== Voting Errors (20-29) =====
    /// Voting on the proposal has closed
    DeadlineExceeded = 20,

    /// Member already voted on the proposal
    AlreadyVoted = 21,

    // ===== Execution Errors (30-39) =====
    /// Voting on the proposal is still open
    DeadlineNotExceeded = 30,

    /// Proposal was already executed
    AlreadyExecuted = 31,

    /// Treasury cannot cover the NFT price
    InsufficientTreasury = 32,
}

impl DaoError {
    /// Human-readable description shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            DaoError::NotDaoMember => "NOT_A_DAO_MEMBER",
            DaoError::NotInitialized => "DAO not initialized",
            DaoError::ProposalNotFound => "Proposal not found",
            DaoError::NftNotForSale => "NFT_NOT_FOR_SALE",
            DaoError::DeadlineExceeded => "DEADLINE_EXCEEDED",
            DaoError::AlreadyVoted => "ALREADY_VOTED",
            DaoError::DeadlineNotExceeded => "DEADLINE_NOT_EXCEEDED",
            DaoError::AlreadyExecuted => "PROPOSAL_ALREADY_EXECUTED",
            DaoError::InsufficientTreasury => "NOT_ENOUGH_FUNDS",
        }
    }

    /// Maps a raw contract error code back to the error, if it is one of ours
    pub fn from_code(code: u32) -> Option<Self> {
        let error = match code {
            1 => DaoError::NotDaoMember,
            2 => DaoError::NotInitialized,
            10 => DaoError::ProposalNotFound,
            11 => DaoError::NftNotForSale,
            20 => DaoError::DeadlineExceeded,
            21 => DaoError::AlreadyVoted,
            30 => DaoError::DeadlineNotExceeded,
            31 => DaoError::AlreadyExecuted,
            32 => DaoError::InsufficientTreasury,
            _ => return None,
        };
        Some(error)
    }
}
