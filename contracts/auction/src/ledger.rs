//! Auction lifecycle: `create -> bid* -> end -> {claim item, claim payment}`.
//!
//! Callers have already been authenticated by the contract entry points.
//! Each function runs inside one contract invocation, so any error rolls
//! back every storage write and transfer it made.

use soroban_sdk::{log, Address, Env, String};

use crate::errors::Error;
use crate::escrow::Escrow;
use crate::events::*;
use crate::fees;
use crate::storage;
use crate::types::{
    Auction, Bid, PlatformConfig, Settlement, MAX_AUCTION_DURATION, MAX_DESCRIPTION_LEN,
    MAX_TITLE_LEN, MIN_AUCTION_DURATION,
};

fn current_block(env: &Env) -> u32 {
    env.ledger().sequence()
}

fn load_config(env: &Env) -> Result<PlatformConfig, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

fn load_auction(env: &Env, auction_id: u64) -> Result<Auction, Error> {
    storage::get_auction(env, auction_id).ok_or(Error::NotFound)
}

fn validate_listing(
    title: &String,
    description: &String,
    starting_price: u128,
    duration: u32,
) -> Result<(), Error> {
    if title.len() == 0 || title.len() > MAX_TITLE_LEN {
        return Err(Error::InvalidInput);
    }
    if description.len() == 0 || description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::InvalidInput);
    }
    if starting_price == 0 {
        return Err(Error::InvalidPrice);
    }
    if !(MIN_AUCTION_DURATION..=MAX_AUCTION_DURATION).contains(&duration) {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}

pub fn create_auction(
    env: &Env,
    seller: Address,
    title: String,
    description: String,
    starting_price: u128,
    duration: u32,
) -> Result<u64, Error> {
    load_config(env)?;
    validate_listing(&title, &description, starting_price, duration)?;

    let created_block = current_block(env);
    let end_block = created_block
        .checked_add(duration)
        .ok_or(Error::InvalidDuration)?;

    let auction_id = storage::allocate_item_id(env);
    let auction = Auction {
        id: auction_id,
        seller,
        title,
        description,
        starting_price,
        current_bid: starting_price,
        highest_bidder: None,
        created_block,
        end_block,
        is_active: true,
        item_claimed: false,
        payment_claimed: false,
    };
    storage::save_auction(env, &auction);
    storage::extend_instance_ttl(env);

    log!(env, "auction {} created, ends at block {}", auction_id, end_block);
    AuctionCreatedEventData {
        auction_id,
        seller: auction.seller,
        starting_price,
        end_block,
    }
    .publish(env);

    Ok(auction_id)
}

/// Accepts `amount` as the new highest bid.
///
/// The previous highest bidder is refunded in full before the new bid is
/// collected, and both happen in the same invocation as the state update.
pub fn place_bid<E: Escrow>(
    env: &Env,
    escrow: &E,
    bidder: Address,
    auction_id: u64,
    amount: u128,
) -> Result<(), Error> {
    load_config(env)?;
    let mut auction = load_auction(env, auction_id)?;

    if !auction.is_active {
        return Err(Error::AuctionEnded);
    }
    if bidder == auction.seller {
        return Err(Error::SelfBid);
    }
    if amount < fees::min_next_bid(auction.current_bid)? {
        return Err(Error::InvalidBid);
    }

    let held = storage::get_escrow(env, auction_id);
    if let Some(previous) = auction.highest_bidder.take() {
        escrow.release(&previous, held)?;
        log!(env, "refunded outbid bidder on auction {}: {}", auction_id, held);
        BidRefundedEventData {
            auction_id,
            bidder: previous,
            amount: held,
        }
        .publish(env);
    }

    escrow.collect(&bidder, amount)?;

    auction.current_bid = amount;
    auction.highest_bidder = Some(bidder.clone());
    storage::set_escrow(env, auction_id, amount);
    storage::set_user_bid(
        env,
        auction_id,
        &bidder,
        &Bid {
            amount,
            block_height: current_block(env),
        },
    );
    storage::save_auction(env, &auction);
    storage::extend_instance_ttl(env);

    BidPlacedEventData {
        auction_id,
        bidder,
        amount,
    }
    .publish(env);

    Ok(())
}

/// Closes bidding once the end block is reached. Anyone may call it.
pub fn end_auction(env: &Env, auction_id: u64) -> Result<(), Error> {
    load_config(env)?;
    let mut auction = load_auction(env, auction_id)?;

    if !auction.is_active {
        return Err(Error::AuctionEnded);
    }
    if current_block(env) < auction.end_block {
        return Err(Error::AuctionNotEnded);
    }

    auction.is_active = false;
    storage::save_auction(env, &auction);

    AuctionClosedEventData {
        auction_id,
        final_bid: auction.current_bid,
    }
    .publish(env);

    Ok(())
}

/// Hands the item certificate to the winning bidder.
pub fn claim_item(env: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
    load_config(env)?;
    let mut auction = load_auction(env, auction_id)?;

    if auction.is_active {
        return Err(Error::AuctionNotEnded);
    }
    if auction.highest_bidder.as_ref() != Some(&caller) {
        return Err(Error::Unauthorized);
    }
    if auction.item_claimed {
        return Err(Error::AlreadyClaimed);
    }

    auction.item_claimed = true;
    storage::set_item_owner(env, auction_id, &caller);
    storage::save_auction(env, &auction);

    ItemClaimedEventData {
        auction_id,
        winner: caller,
    }
    .publish(env);

    Ok(())
}

/// Pays the seller the winning bid minus the platform fee and books the fee
/// as platform earnings. Returns the seller payout.
pub fn claim_payment<E: Escrow>(
    env: &Env,
    escrow: &E,
    caller: Address,
    auction_id: u64,
) -> Result<u128, Error> {
    let config = load_config(env)?;
    let mut auction = load_auction(env, auction_id)?;

    if auction.is_active {
        return Err(Error::AuctionNotEnded);
    }
    if auction.seller != caller {
        return Err(Error::Unauthorized);
    }
    if auction.payment_claimed {
        return Err(Error::AlreadyClaimed);
    }

    // No bidder means nothing was ever escrowed.
    let held = storage::get_escrow(env, auction_id);
    let settlement = fees::settle(held, config.fee_rate_bps)?;

    let earnings = storage::get_platform_earnings(env)
        .checked_add(settlement.platform_fee)
        .ok_or(Error::ArithmeticOverflow)?;

    escrow.release(&auction.seller, settlement.seller_payout)?;

    storage::set_platform_earnings(env, earnings);
    storage::set_escrow(env, auction_id, 0);
    auction.payment_claimed = true;
    storage::save_auction(env, &auction);
    storage::extend_instance_ttl(env);

    PaymentClaimedEventData {
        auction_id,
        seller: caller,
        payout: settlement.seller_payout,
        platform_fee: settlement.platform_fee,
    }
    .publish(env);

    Ok(settlement.seller_payout)
}

// ============================================================================
// Queries
// ============================================================================

pub fn blocks_remaining(env: &Env, auction_id: u64) -> Result<u32, Error> {
    let auction = load_auction(env, auction_id)?;
    Ok(fees::blocks_remaining(auction.end_block, current_block(env)))
}

/// Fee split the seller would get if payment were claimed at the current rate.
pub fn preview_settlement(env: &Env, auction_id: u64) -> Result<Settlement, Error> {
    let config = load_config(env)?;
    let auction = load_auction(env, auction_id)?;
    let amount = if auction.highest_bidder.is_some() {
        auction.current_bid
    } else {
        0
    };
    fees::settle(amount, config.fee_rate_bps)
}
