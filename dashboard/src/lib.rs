//! # Stikman DAO dashboard
//!
//! Terminal front end for the Stikman DAO. Members holding a Stikman NFT
//! propose buying NFTs from the marketplace with treasury funds, vote on
//! open proposals and execute them once voting has closed.
//!
//! ## Modules
//!
//! - `app` - `Dashboard`, the controller owning the page state
//! - `session` - Wallet connection, network check and signer handles
//! - `gateway` - Contract calls behind the `DaoGateway` trait
//! - `proposals` - Proposal view-model and list fetch
//! - `render` - Text rendering of the page
//! - `command` - Prompt command parsing
//! - `format` - Amount and timestamp formatting
//! - `alerts` - Blocking notices to the user
//!
//! ## Usage
//!
//! ```rust,ignore
//! let session = Session::new(wallet, ContractGateway::new(env, addresses), network);
//! let mut dashboard = Dashboard::new(session, TerminalAlerts);
//! dashboard.start();
//! dashboard.select_tab(Tab::ViewProposals);
//! print!("{}", dashboard.render());
//! ```

pub mod alerts;
pub mod app;
pub mod command;
pub mod error;
pub mod format;
pub mod gateway;
pub mod proposals;
pub mod render;
pub mod session;
pub mod state;

#[cfg(test)]
mod testing;

pub use alerts::{Alerts, TerminalAlerts};
pub use app::Dashboard;
pub use command::{Command, CommandError};
pub use error::DashboardError;
pub use gateway::{ContractAddresses, ContractGateway, DaoGateway};
pub use proposals::{ProposalStatus, ProposalView};
pub use render::Page;
pub use session::{LedgerWallet, Session, Signer, Wallet};
pub use state::{DashboardState, Tab};
