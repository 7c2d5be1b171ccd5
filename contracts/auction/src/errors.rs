use soroban_sdk::contracterror;

/// Error codes for the auction ledger contract.
///
/// Codes 100..=113 are part of the public interface that wallets and UIs
/// branch on; they never change meaning.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the platform owner
    OwnerOnly = 100,
    /// Auction id does not exist
    NotFound = 101,
    /// Caller is not the party allowed to claim
    Unauthorized = 102,
    /// Bid below the minimum increment, or fee rate above the cap
    InvalidBid = 103,
    /// Auction has already been ended or no longer accepts bids
    AuctionEnded = 104,
    /// Seller tried to bid on their own auction
    SelfBid = 106,
    /// Item or payment was already claimed
    AlreadyClaimed = 109,
    /// Auction is still running
    AuctionNotEnded = 110,
    /// Empty or oversized title/description
    InvalidInput = 111,
    /// Duration outside the allowed block range
    InvalidDuration = 112,
    /// Starting price must be positive
    InvalidPrice = 113,
    /// Contract has not been initialized
    NotInitialized = 114,
    /// Contract has already been initialized
    AlreadyInitialized = 115,
    /// Amount does not fit the arithmetic or token range
    ArithmeticOverflow = 116,
}
