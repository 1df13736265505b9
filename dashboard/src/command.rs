//! Commands typed at the dashboard prompt

use std::str::FromStr;

use stikman_shared::constants::{VOTE_NAY_LABEL, VOTE_YAY_LABEL};
use thiserror::Error;

use crate::state::Tab;

pub const HELP: &str = "\
Commands:
  connect                   connect the wallet again after a refusal
  tab create | tab view     switch tabs
  create <token-id>         propose buying a marketplace NFT
  vote <id> yay|nay         vote on an open proposal
  execute <id>              execute a proposal past its deadline
  wait <seconds>            advance the sandbox clock
  refresh                   reload balances and proposals
  help                      show this list
  quit                      leave the dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Connect,
    Tab(Tab),
    /// Raw token id text, validated by the dashboard on submit
    Create(String),
    Vote { proposal_id: u32, label: &'static str },
    Execute(u32),
    Wait(u64),
    Refresh,
    Help,
    Quit,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        match (name.to_ascii_lowercase().as_str(), args) {
            ("tab", [tab]) => match tab.to_ascii_lowercase().as_str() {
                "create" => Ok(Command::Tab(Tab::CreateProposal)),
                "view" => Ok(Command::Tab(Tab::ViewProposals)),
                _ => Err(usage("tab", "`create` or `view`")),
            },
            ("tab", _) => Err(usage("tab", "`create` or `view`")),
            ("create", [token_id]) => Ok(Command::Create(token_id.to_string())),
            ("create", _) => Err(usage("create", "a token id")),
            ("vote", [id, choice]) => {
                let proposal_id = id.parse().map_err(|_| usage("vote", "a proposal id"))?;
                let label = match choice.to_ascii_lowercase().as_str() {
                    "yay" => VOTE_YAY_LABEL,
                    "nay" => VOTE_NAY_LABEL,
                    _ => return Err(usage("vote", "`yay` or `nay`")),
                };
                Ok(Command::Vote { proposal_id, label })
            }
            ("vote", _) => Err(usage("vote", "a proposal id and `yay` or `nay`")),
            ("execute", [id]) => id
                .parse()
                .map(Command::Execute)
                .map_err(|_| usage("execute", "a proposal id")),
            ("execute", _) => Err(usage("execute", "a proposal id")),
            ("wait", [seconds]) => seconds
                .parse()
                .map(Command::Wait)
                .map_err(|_| usage("wait", "a number of seconds")),
            ("wait", _) => Err(usage("wait", "a number of seconds")),
            ("connect", []) => Ok(Command::Connect),
            ("refresh", []) => Ok(Command::Refresh),
            ("help", []) => Ok(Command::Help),
            ("quit" | "exit", []) => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

fn usage(command: &'static str, expected: &'static str) -> CommandError {
    CommandError::Usage { command, expected }
}
