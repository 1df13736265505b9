use std::io::{self, BufRead, Write};

use anyhow::Result;
use stikman_dashboard::command::HELP;
use stikman_dashboard::{
    Alerts, Command, ContractAddresses, ContractGateway, DaoGateway, Dashboard, LedgerWallet,
    Session, TerminalAlerts, Wallet,
};
use stikman_deploy::config::{load_wasm, path_var};
use stikman_deploy::{deploy, strkey, DeployConfig, Sandbox};
use stikman_shared::validation::expected_network_id;
use tracing::info;
use tracing_subscriber::EnvFilter;

const NFT_WASM_VAR: &str = "STIKMAN_NFT_WASM";
const DEFAULT_NFT_WASM: &str = "target/wasm32-unknown-unknown/release/stikman_nft.wasm";

const PROMPT: &str = "stikman> ";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = DeployConfig::from_env();
    let marketplace_wasm = load_wasm(&config.marketplace_wasm)?;
    let dao_wasm = load_wasm(&config.dao_wasm)?;
    let nft_wasm = load_wasm(&path_var(NFT_WASM_VAR, DEFAULT_NFT_WASM))?;

    let sandbox = Sandbox::start();
    let env = sandbox.env.clone();
    let nft_collection = env.register(nft_wasm.as_slice(), ());
    let deployment = deploy(
        &env,
        marketplace_wasm.as_slice(),
        dao_wasm.as_slice(),
        &sandbox.plan(nft_collection.clone()),
    )?;
    info!(dao = %strkey(&deployment.dao), "sandbox ready");

    let gateway = ContractGateway::new(
        env.clone(),
        ContractAddresses {
            dao: deployment.dao,
            nft_collection,
            treasury_token: sandbox.treasury_token.clone(),
        },
    );
    let wallet = LedgerWallet::new(env.clone(), sandbox.deployer.clone());
    let session = Session::new(wallet, gateway, expected_network_id(&env).to_array());
    let mut dashboard = Dashboard::new(session, TerminalAlerts);

    dashboard.start();
    print!("{}", dashboard.render());
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(command) => {
                run(&mut dashboard, &sandbox, command);
                print!("{}", dashboard.render());
            }
            Err(error) => println!("{}", error),
        }
    }

    Ok(())
}

fn run<W: Wallet, G: DaoGateway, A: Alerts>(
    dashboard: &mut Dashboard<W, G, A>,
    sandbox: &Sandbox,
    command: Command,
) {
    match command {
        Command::Connect => dashboard.start(),
        Command::Tab(tab) => dashboard.select_tab(tab),
        Command::Create(token_id) => {
            dashboard.set_nft_token_id_input(token_id);
            dashboard.create_proposal();
        }
        Command::Vote { proposal_id, label } => {
            dashboard.vote_on_proposal(proposal_id, label);
        }
        Command::Execute(proposal_id) => {
            dashboard.execute_proposal(proposal_id);
        }
        Command::Wait(seconds) => {
            sandbox.advance_time(seconds);
            dashboard.refresh();
        }
        Command::Refresh => dashboard.refresh(),
        Command::Help | Command::Quit => {}
    }
}
