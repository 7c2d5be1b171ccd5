//! Integer money math for bids and settlement. Everything is in the token's
//! smallest unit and every operation is overflow-checked.

use crate::errors::Error;
use crate::types::{Settlement, BASIS_POINTS, MIN_BID_INCREMENT};

/// `floor(amount * rate_bps / 10000)`
pub fn platform_fee(amount: u128, rate_bps: u32) -> Result<u128, Error> {
    amount
        .checked_mul(rate_bps as u128)
        .map(|scaled| scaled / BASIS_POINTS)
        .ok_or(Error::ArithmeticOverflow)
}

pub fn settle(amount: u128, rate_bps: u32) -> Result<Settlement, Error> {
    let platform_fee = platform_fee(amount, rate_bps)?;
    let seller_payout = amount
        .checked_sub(platform_fee)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(Settlement {
        platform_fee,
        seller_payout,
    })
}

/// Smallest amount `place_bid` accepts on top of `current_bid`.
pub fn min_next_bid(current_bid: u128) -> Result<u128, Error> {
    current_bid
        .checked_add(MIN_BID_INCREMENT)
        .ok_or(Error::ArithmeticOverflow)
}

pub fn blocks_remaining(end_block: u32, current_block: u32) -> u32 {
    end_block.saturating_sub(current_block)
}
