use anyhow::Result;
use soroban_sdk::Address;
use stikman_deploy::config::load_wasm;
use stikman_deploy::{deploy, strkey, DeployConfig, Sandbox, DAO_NAME, MARKETPLACE_NAME};
use stikman_shared::constants::STIKMAN_NFT_CONTRACT_ADDRESS;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = DeployConfig::from_env();
    let marketplace_wasm = load_wasm(&config.marketplace_wasm)?;
    let dao_wasm = load_wasm(&config.dao_wasm)?;

    let sandbox = Sandbox::start();
    let nft_collection = Address::from_str(&sandbox.env, STIKMAN_NFT_CONTRACT_ADDRESS);
    let plan = sandbox.plan(nft_collection);

    let deployment = deploy(
        &sandbox.env,
        marketplace_wasm.as_slice(),
        dao_wasm.as_slice(),
        &plan,
    )?;

    println!("{} deployed to: {}", MARKETPLACE_NAME, strkey(&deployment.marketplace));
    println!("{} deployed to: {}", DAO_NAME, strkey(&deployment.dao));
    Ok(())
}
