use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use soroban_sdk::testutils::Register;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env, InvokeError};
use stikman_shared::{DaoClient, MarketplaceClient};
use tracing::info;

use crate::error::DeployError;

pub const MARKETPLACE_NAME: &str = "FakeNFTMarketplace";
pub const DAO_NAME: &str = "StikmanDAO";

/// Inputs of a deployment that do not come from the contract code itself
#[derive(Clone, Debug)]
pub struct DeployPlan {
    /// NFT collection whose holders may use the DAO
    pub nft_collection: Address,
    /// Asset the treasury is held in
    pub treasury_token: Address,
    /// Account paying the treasury seed
    pub funder: Address,
    pub seed_amount: i128,
}

/// Addresses and confirmed state of a finished deployment
#[derive(Clone, Debug, PartialEq)]
pub struct Deployment {
    pub marketplace: Address,
    pub dao: Address,
    pub nft_price: i128,
    pub treasury_balance: i128,
}

/// Deploys the marketplace, then the DAO pointing at it, then seeds the
/// DAO treasury. Each contract is confirmed by reading it back before the
/// next step starts.
pub fn deploy<M, D>(
    env: &Env,
    marketplace_code: M,
    dao_code: D,
    plan: &DeployPlan,
) -> Result<Deployment, DeployError>
where
    M: Register,
    D: Register,
{
    let marketplace = instantiate(MARKETPLACE_NAME, || env.register(marketplace_code, ()))?;
    let nft_price = confirm_marketplace(env, &marketplace)?;
    info!(address = %strkey(&marketplace), nft_price, "{} deployed", MARKETPLACE_NAME);

    let dao = instantiate(DAO_NAME, || {
        env.register(
            dao_code,
            (marketplace.clone(), plan.nft_collection.clone()),
        )
    })?;
    seed_treasury(env, &dao, plan)?;
    let treasury_balance = confirm_dao(env, &dao, plan)?;
    info!(address = %strkey(&dao), treasury_balance, "{} deployed", DAO_NAME);

    Ok(Deployment {
        marketplace,
        dao,
        nft_price,
        treasury_balance,
    })
}

/// Strkey form of `address` (`C...` for contracts, `G...` for accounts)
pub fn strkey(address: &Address) -> String {
    let key = address.to_string();
    let mut bytes = vec![0u8; key.len() as usize];
    key.copy_into_slice(&mut bytes);
    String::from_utf8_lossy(&bytes).into_owned()
}

fn instantiate(
    contract: &'static str,
    register: impl FnOnce() -> Address,
) -> Result<Address, DeployError> {
    panic::catch_unwind(AssertUnwindSafe(register)).map_err(|payload| {
        DeployError::Instantiate {
            contract,
            reason: panic_reason(payload),
        }
    })
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    "host panicked".to_string()
}

/// Flattens a `try_` client result, keeping a printable reason on failure
fn answered<T, C, E>(outcome: Result<Result<T, C>, Result<E, InvokeError>>) -> Result<T, String>
where
    C: Debug,
    E: Debug,
{
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(format!("undecodable result: {:?}", conversion)),
        Err(Ok(error)) => Err(format!("{:?}", error)),
        Err(Err(invoke)) => Err(format!("{:?}", invoke)),
    }
}

fn confirm_marketplace(env: &Env, marketplace: &Address) -> Result<i128, DeployError> {
    answered(MarketplaceClient::new(env, marketplace).try_get_price()).map_err(|reason| {
        DeployError::Unconfirmed {
            contract: MARKETPLACE_NAME,
            reason,
        }
    })
}

fn seed_treasury(env: &Env, dao: &Address, plan: &DeployPlan) -> Result<(), DeployError> {
    let token = TokenClient::new(env, &plan.treasury_token);
    answered(token.try_transfer(&plan.funder, dao, &plan.seed_amount))
        .map_err(|reason| DeployError::SeedTransfer { reason })
}

fn confirm_dao(env: &Env, dao: &Address, plan: &DeployPlan) -> Result<i128, DeployError> {
    let unconfirmed = |reason| DeployError::Unconfirmed {
        contract: DAO_NAME,
        reason,
    };

    answered(DaoClient::new(env, dao).try_num_proposals()).map_err(unconfirmed)?;
    let balance = answered(TokenClient::new(env, &plan.treasury_token).try_balance(dao))
        .map_err(unconfirmed)?;

    if balance != plan.seed_amount {
        return Err(DeployError::SeedMismatch {
            expected: plan.seed_amount,
            actual: balance,
        });
    }
    Ok(balance)
}
