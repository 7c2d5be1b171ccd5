use crate::types::{
    Auction, Bid, DataKey, PlatformConfig, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env};

// ============================================================================
// INSTANCE STORAGE
// ============================================================================

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<PlatformConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PlatformConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Id the next created auction will receive. Starts at 1.
pub fn get_next_item_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextItemId)
        .unwrap_or(1)
}

/// Hands out the next auction id and advances the counter.
pub fn allocate_item_id(env: &Env) -> u64 {
    let id = get_next_item_id(env);
    env.storage().instance().set(&DataKey::NextItemId, &(id + 1));
    id
}

pub fn get_platform_earnings(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::PlatformEarnings)
        .unwrap_or(0)
}

pub fn set_platform_earnings(env: &Env, amount: u128) {
    env.storage()
        .instance()
        .set(&DataKey::PlatformEarnings, &amount);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// BID / ESCROW STORAGE
// ============================================================================

pub fn get_user_bid(env: &Env, auction_id: u64, bidder: &Address) -> Option<Bid> {
    let key = DataKey::UserBid(auction_id, bidder.clone());
    let bid = env.storage().persistent().get::<_, Bid>(&key);
    if bid.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    bid
}

pub fn set_user_bid(env: &Env, auction_id: u64, bidder: &Address, bid: &Bid) {
    let key = DataKey::UserBid(auction_id, bidder.clone());
    env.storage().persistent().set(&key, bid);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Funds the contract currently holds on behalf of an auction's top bidder.
pub fn get_escrow(env: &Env, auction_id: u64) -> u128 {
    let key = DataKey::Escrow(auction_id);
    match env.storage().persistent().get::<_, u128>(&key) {
        Some(amount) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            amount
        }
        None => 0,
    }
}

pub fn set_escrow(env: &Env, auction_id: u64, amount: u128) {
    let key = DataKey::Escrow(auction_id);
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ITEM OWNERSHIP
// ============================================================================

pub fn get_item_owner(env: &Env, auction_id: u64) -> Option<Address> {
    let key = DataKey::ItemOwner(auction_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    owner
}

pub fn set_item_owner(env: &Env, auction_id: u64, owner: &Address) {
    let key = DataKey::ItemOwner(auction_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
