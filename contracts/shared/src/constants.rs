//! Configuration constants shared by the dashboard and the deployment script
//!
//! The dashboard talks to exactly one network; switching networks means
//! changing these values and rebuilding.

// ===== Network =====

/// Passphrase of the only network the dashboard accepts
pub const NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Name shown to the user when the wallet sits on another network
pub const NETWORK_NAME: &str = "Stellar testnet";

// ===== Contracts =====

/// Stikman NFT collection whose holders are DAO members
pub const STIKMAN_NFT_CONTRACT_ADDRESS: &str =
    "CBSSHRZEYW74OEH7GPHDI6AIU3ZLQNO5PN4ESGPHT6CA2EEVKKO2WSNF";

// ===== Treasury =====

/// Decimal places of the treasury asset (native XLM counts in stroops)
pub const TREASURY_DECIMALS: u32 = 7;

/// Ticker displayed next to the treasury balance
pub const TREASURY_SYMBOL: &str = "XLM";

/// Amount moved into the DAO treasury at deployment (1 XLM)
pub const TREASURY_SEED_AMOUNT: i128 = 10_000_000;

// ===== Votes =====

/// Label the dashboard sends for a vote in favour
pub const VOTE_YAY_LABEL: &str = "YAY";

/// Label the dashboard sends for a vote against
pub const VOTE_NAY_LABEL: &str = "NAY";
