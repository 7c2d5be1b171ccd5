use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::escrow::Escrow;
use crate::events::{EarningsWithdrawnEventData, FeeRateUpdatedEventData};
use crate::storage;
use crate::types::{PlatformConfig, MAX_FEE_RATE_BPS};

/// Loads the config and checks `caller` is the owner. Ownership is checked
/// before any argument so non-owners always see `OwnerOnly`.
pub fn require_owner(env: &Env, caller: &Address) -> Result<PlatformConfig, Error> {
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    if config.owner != *caller {
        return Err(Error::OwnerOnly);
    }
    Ok(config)
}

pub fn set_platform_fee_rate(env: &Env, caller: &Address, new_rate_bps: u32) -> Result<(), Error> {
    let mut config = require_owner(env, caller)?;

    if new_rate_bps > MAX_FEE_RATE_BPS {
        return Err(Error::InvalidBid);
    }

    let old_rate_bps = config.fee_rate_bps;
    config.fee_rate_bps = new_rate_bps;
    storage::set_config(env, &config);
    storage::extend_instance_ttl(env);

    FeeRateUpdatedEventData {
        old_rate_bps,
        new_rate_bps,
    }
    .publish(env);

    Ok(())
}

/// Pays the accumulated platform fees to the owner and zeroes the counter.
pub fn withdraw_platform_earnings<E: Escrow>(
    env: &Env,
    escrow: &E,
    caller: &Address,
) -> Result<u128, Error> {
    let config = require_owner(env, caller)?;

    let amount = storage::get_platform_earnings(env);
    escrow.release(&config.owner, amount)?;
    storage::set_platform_earnings(env, 0);
    storage::extend_instance_ttl(env);

    log!(env, "platform earnings withdrawn: {}", amount);
    EarningsWithdrawnEventData {
        owner: config.owner,
        amount,
    }
    .publish(env);

    Ok(amount)
}
