use soroban_sdk::{contracttype, Address, String};

// ============================================================================
// Protocol constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// A new bid must beat the current one by at least this much (1 unit = 10^6 micro-units)
pub const MIN_BID_INCREMENT: u128 = 1_000_000;

/// Shortest auction, in blocks
pub const MIN_AUCTION_DURATION: u32 = 144;

/// Longest auction, in blocks
pub const MAX_AUCTION_DURATION: u32 = 4320;

pub const MAX_TITLE_LEN: u32 = 50;
pub const MAX_DESCRIPTION_LEN: u32 = 500;

/// Platform fee applied when nothing else has been configured (2.5%)
pub const DEFAULT_FEE_RATE_BPS: u32 = 250;

/// Upper bound accepted by `set_platform_fee_rate` (10%)
pub const MAX_FEE_RATE_BPS: u32 = 1000;

pub const BASIS_POINTS: u128 = 10_000;

// ============================================================================
// Records
// ============================================================================

/// Singleton platform configuration, fixed owner and currency token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    pub owner: Address,
    pub token: Address,
    pub fee_rate_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub seller: Address,
    pub title: String,
    pub description: String,
    pub starting_price: u128,
    pub current_bid: u128,
    pub highest_bidder: Option<Address>,
    pub created_block: u32,
    pub end_block: u32,
    pub is_active: bool,
    pub item_claimed: bool,
    pub payment_claimed: bool,
}

/// Latest bid of one bidder on one auction. Superseded bids are refunded,
/// not kept as history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub amount: u128,
    pub block_height: u32,
}

/// Fee split applied to a winning bid when the seller claims payment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub platform_fee: u128,
    pub seller_payout: u128,
}

#[contracttype]
pub enum DataKey {
    Config,
    NextItemId,
    PlatformEarnings,
    Auction(u64),
    UserBid(u64, Address),
    Escrow(u64),
    ItemOwner(u64),
}
