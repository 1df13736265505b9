use stikman_shared::constants::NETWORK_NAME;
use stikman_shared::DaoError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Please switch to the {}!", NETWORK_NAME)]
    WrongNetwork,

    #[error("Wallet is not connected")]
    NotConnected,

    #[error("Wallet connection was rejected")]
    ConnectionRejected,

    /// Failure reported by the DAO contract; displays the contract's message
    #[error("{}", .0.message())]
    Dao(DaoError),

    /// Contract failure with a code outside the DAO's error set
    #[error("Contract error #{0}")]
    Contract(u32),

    #[error("Transaction aborted")]
    Aborted,

    #[error("Host error: {0}")]
    Host(String),

    #[error("Could not decode the contract response")]
    Decode,

    #[error("Invalid NFT token id: {0:?}")]
    InvalidTokenId(String),
}

impl From<DaoError> for DashboardError {
    fn from(error: DaoError) -> Self {
        DashboardError::Dao(error)
    }
}

impl From<soroban_sdk::Error> for DashboardError {
    fn from(error: soroban_sdk::Error) -> Self {
        DashboardError::Host(format!("{:?}", error))
    }
}
