//! # Payment collection
//!
//! The stated (plaintext) amount moves from contributor to treasury through
//! the accepted asset's allowance flow: the contributor approves the
//! campaign beforehand, the campaign then pulls with `transfer_from`.
//!
//! This runs before any ledger write. A declined transfer returns an error,
//! and a returned error discards the whole invocation, so a contribution is
//! either paid and credited or neither.

use soroban_sdk::{log, token, Address, Env};

use crate::types::CampaignConfig;
use crate::Error;

pub fn collect(
    env: &Env,
    config: &CampaignConfig,
    contributor: &Address,
    stated_amount: u64,
) -> Result<(), Error> {
    let amount = i128::from(stated_amount);
    let asset = token::Client::new(env, &config.asset);
    let spender = env.current_contract_address();

    if asset.allowance(contributor, &spender) < amount {
        return Err(Error::InsufficientAllowance);
    }
    if asset.balance(contributor) < amount {
        return Err(Error::InsufficientBalance);
    }

    match asset.try_transfer_from(&spender, contributor, &config.treasury, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "asset transfer declined", stated_amount);
            Err(Error::TransferFailed)
        }
    }
}
