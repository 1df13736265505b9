//! Data crossing the DAO contract interface

use soroban_sdk::contracttype;

use crate::constants::VOTE_YAY_LABEL;

/// Vote choice, encoded on chain as `0` (YAY) or `1` (NAY)
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Vote {
    Yay = 0,
    Nay = 1,
}

impl Vote {
    /// Maps a button label to a vote. Only the exact label `"YAY"` is a vote
    /// in favour; every other label counts as NAY.
    pub fn from_label(label: &str) -> Self {
        if label == VOTE_YAY_LABEL {
            Vote::Yay
        } else {
            Vote::Nay
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Vote::Yay => "YAY",
            Vote::Nay => "NAY",
        }
    }
}

/// Proposal as returned by `proposals(id)`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRecord {
    /// Marketplace token the DAO would buy
    pub nft_token_id: u32,
    /// Ledger timestamp (seconds) at which voting closes
    pub deadline: u64,
    pub yay_votes: u32,
    pub nay_votes: u32,
    pub executed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yay_label_maps_to_zero() {
        assert_eq!(Vote::from_label("YAY"), Vote::Yay);
        assert_eq!(Vote::from_label("YAY").code(), 0);
    }

    #[test]
    fn test_any_other_label_maps_to_one() {
        for label in ["NAY", "yay", "Yay", "", " YAY", "YAY ", "NO", "0"] {
            assert_eq!(Vote::from_label(label), Vote::Nay, "label {:?}", label);
            assert_eq!(Vote::from_label(label).code(), 1);
        }
    }

    #[test]
    fn test_label_round_trips_through_mapping() {
        assert_eq!(Vote::from_label(Vote::Yay.label()), Vote::Yay);
        assert_eq!(Vote::from_label(Vote::Nay.label()), Vote::Nay);
    }
}
