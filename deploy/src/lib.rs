//! Deployment of the Stikman DAO contracts
//!
//! The marketplace goes first; the DAO is then instantiated with the
//! marketplace and NFT collection addresses and its treasury is seeded.

pub mod config;
pub mod deploy;
pub mod error;
pub mod sandbox;

pub use config::DeployConfig;
pub use deploy::{deploy, strkey, DeployPlan, Deployment, DAO_NAME, MARKETPLACE_NAME};
pub use error::DeployError;
pub use sandbox::Sandbox;
