#![no_std]

mod admin;
mod errors;
mod escrow;
mod events;
mod fees;
mod ledger;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub use crate::errors::Error;
pub use crate::escrow::{Escrow, TokenEscrow};
pub use crate::types::{Auction, Bid, PlatformConfig, Settlement};

use crate::events::InitializedEventData;
use crate::types::DEFAULT_FEE_RATE_BPS;

/// Auction Ledger
///
/// Sequentially numbered auctions with escrowed bids:
/// - sellers list an item with a starting price and a duration in blocks
/// - each new high bid refunds the previous one in the same transaction
/// - after the end block anyone can close the auction
/// - the winner claims the item, the seller claims the bid minus the platform fee
/// - the platform owner tunes the fee rate and withdraws accumulated fees
#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Set the platform owner and the token bids are paid in.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        let config = PlatformConfig {
            owner: owner.clone(),
            token: token.clone(),
            fee_rate_bps: DEFAULT_FEE_RATE_BPS,
        };
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        InitializedEventData {
            owner,
            token,
            fee_rate_bps: DEFAULT_FEE_RATE_BPS,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// Open a new auction and return its id.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - Empty or oversized title/description
    /// * `Error::InvalidPrice` - Zero starting price
    /// * `Error::InvalidDuration` - Duration outside 144..=4320 blocks
    pub fn create_auction(
        env: Env,
        seller: Address,
        title: String,
        description: String,
        starting_price: u128,
        duration: u32,
    ) -> Result<u64, Error> {
        seller.require_auth();
        ledger::create_auction(&env, seller, title, description, starting_price, duration)
    }

    /// Outbid the current highest bidder. `amount` must be at least the current
    /// bid plus one full unit. Bids are accepted until someone calls
    /// `end_auction`, even once the end block has been reached.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction
    /// * `Error::AuctionEnded` - Auction already closed
    /// * `Error::SelfBid` - Bidder is the seller
    /// * `Error::InvalidBid` - Amount below the minimum increment
    pub fn place_bid(env: Env, auction_id: u64, bidder: Address, amount: u128) -> Result<(), Error> {
        bidder.require_auth();
        let escrow = token_escrow(&env)?;
        ledger::place_bid(&env, &escrow, bidder, auction_id, amount)
    }

    /// Close an auction whose end block has been reached.
    ///
    /// # Errors
    /// * `Error::AuctionNotEnded` - End block not reached yet
    /// * `Error::AuctionEnded` - Already closed
    pub fn end_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        ledger::end_auction(&env, auction_id)
    }

    /// Winner takes the item certificate of an ended auction.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction
    /// * `Error::AuctionNotEnded` - Auction still open
    /// * `Error::Unauthorized` - Caller is not the highest bidder
    /// * `Error::AlreadyClaimed` - Item already claimed
    pub fn claim_item(env: Env, auction_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        ledger::claim_item(&env, caller, auction_id)
    }

    /// Seller collects the winning bid minus the platform fee. Returns the payout.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction
    /// * `Error::AuctionNotEnded` - Auction still open
    /// * `Error::Unauthorized` - Caller is not the seller
    /// * `Error::AlreadyClaimed` - Payment already claimed
    pub fn claim_payment(env: Env, auction_id: u64, caller: Address) -> Result<u128, Error> {
        caller.require_auth();
        let escrow = token_escrow(&env)?;
        ledger::claim_payment(&env, &escrow, caller, auction_id)
    }

    // ========================================================================
    // PLATFORM ADMINISTRATION
    // ========================================================================

    /// Update the platform fee (owner only, at most 1000 bps).
    ///
    /// # Errors
    /// * `Error::OwnerOnly` - Caller is not the platform owner
    /// * `Error::InvalidBid` - Rate above 1000 bps
    pub fn set_platform_fee_rate(env: Env, caller: Address, new_rate_bps: u32) -> Result<(), Error> {
        caller.require_auth();
        admin::set_platform_fee_rate(&env, &caller, new_rate_bps)
    }

    /// Transfer all accumulated fees to the owner. Returns the amount withdrawn.
    ///
    /// # Errors
    /// * `Error::OwnerOnly` - Caller is not the platform owner
    pub fn withdraw_platform_earnings(env: Env, caller: Address) -> Result<u128, Error> {
        caller.require_auth();
        let escrow = token_escrow(&env)?;
        admin::withdraw_platform_earnings(&env, &escrow, &caller)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(env: Env, auction_id: u64) -> Option<Auction> {
        storage::get_auction(&env, auction_id)
    }

    pub fn get_user_bid(env: Env, auction_id: u64, bidder: Address) -> Option<Bid> {
        storage::get_user_bid(&env, auction_id, &bidder)
    }

    pub fn get_next_item_id(env: Env) -> u64 {
        storage::get_next_item_id(&env)
    }

    pub fn get_platform_earnings(env: Env) -> u128 {
        storage::get_platform_earnings(&env)
    }

    pub fn get_platform_fee_rate(env: Env) -> Result<u32, Error> {
        Self::get_config(env).map(|config| config.fee_rate_bps)
    }

    pub fn get_config(env: Env) -> Result<PlatformConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Amount currently held for the auction's highest bidder.
    pub fn get_escrow_balance(env: Env, auction_id: u64) -> u128 {
        storage::get_escrow(&env, auction_id)
    }

    /// Holder of the item certificate, once the winner has claimed it.
    pub fn get_item_owner(env: Env, auction_id: u64) -> Option<Address> {
        storage::get_item_owner(&env, auction_id)
    }

    pub fn get_blocks_remaining(env: Env, auction_id: u64) -> Result<u32, Error> {
        ledger::blocks_remaining(&env, auction_id)
    }

    /// Fee and seller payout for the current highest bid at today's rate.
    pub fn preview_settlement(env: Env, auction_id: u64) -> Result<Settlement, Error> {
        ledger::preview_settlement(&env, auction_id)
    }
}

fn token_escrow(env: &Env) -> Result<TokenEscrow<'_>, Error> {
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    Ok(TokenEscrow::new(env, &config.token))
}

#[cfg(test)]
mod test;
