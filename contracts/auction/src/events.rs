use soroban_sdk::{contractevent, Address};

/// Event emitted when the platform is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub owner: Address,
    pub token: Address,
    pub fee_rate_bps: u32,
}

/// Event emitted when a seller opens an auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub starting_price: u128,
    pub end_block: u32,
}

/// Event emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: u128,
}

/// Event emitted when an outbid bidder gets their escrow back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: u128,
}

/// Event emitted when an auction stops accepting bids
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionClosedEventData {
    #[topic]
    pub auction_id: u64,
    pub final_bid: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemClaimedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub winner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentClaimedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub payout: u128,
    pub platform_fee: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdatedEventData {
    pub old_rate_bps: u32,
    pub new_rate_bps: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarningsWithdrawnEventData {
    #[topic]
    pub owner: Address,
    pub amount: u128,
}
