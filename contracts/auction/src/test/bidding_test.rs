use crate::test::{advance_blocks, create_test_auction, setup_test, INITIAL_BALANCE, ONE_UNIT};
use crate::{Bid, Error};

#[test]
fn test_place_valid_bid() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);
    let bid_block = s.env.ledger().sequence();

    s.client.place_bid(&auction_id, &s.bidder1, &2_000_000);

    let auction = s.client.get_auction(&auction_id).unwrap();
    assert_eq!(auction.current_bid, 2_000_000);
    assert_eq!(auction.highest_bidder, Some(s.bidder1.clone()));
    assert!(auction.is_active);

    assert_eq!(
        s.client.get_user_bid(&auction_id, &s.bidder1),
        Some(Bid {
            amount: 2_000_000,
            block_height: bid_block,
        })
    );
    assert_eq!(s.client.get_user_bid(&auction_id, &s.bidder2), None);

    assert_eq!(s.client.get_escrow_balance(&auction_id), 2_000_000);
    assert_eq!(s.token.balance(&s.bidder1), INITIAL_BALANCE - 2_000_000);
    assert_eq!(s.token.balance(&s.contract_id), 2_000_000);
}

#[test]
fn test_outbid_refunds_previous_bidder() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);

    s.client.place_bid(&auction_id, &s.bidder1, &2_000_000);
    s.client.place_bid(&auction_id, &s.bidder2, &3_500_000);

    let auction = s.client.get_auction(&auction_id).unwrap();
    assert_eq!(auction.current_bid, 3_500_000);
    assert_eq!(auction.highest_bidder, Some(s.bidder2.clone()));

    assert_eq!(s.token.balance(&s.bidder1), INITIAL_BALANCE);
    assert_eq!(s.token.balance(&s.bidder2), INITIAL_BALANCE - 3_500_000);
    assert_eq!(s.token.balance(&s.contract_id), 3_500_000);
    assert_eq!(s.client.get_escrow_balance(&auction_id), 3_500_000);
}

#[test]
fn test_highest_bidder_can_raise_own_bid() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);

    s.client.place_bid(&auction_id, &s.bidder1, &2_000_000);
    s.client.place_bid(&auction_id, &s.bidder1, &3_000_000);

    assert_eq!(s.token.balance(&s.bidder1), INITIAL_BALANCE - 3_000_000);
    assert_eq!(s.token.balance(&s.contract_id), 3_000_000);
    assert_eq!(
        s.client.get_user_bid(&auction_id, &s.bidder1).unwrap().amount,
        3_000_000
    );
}

#[test]
fn test_seller_cannot_bid() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);

    let result = s.client.try_place_bid(&auction_id, &s.seller, &2_000_000);
    assert_eq!(result, Err(Ok(Error::SelfBid)));
}

#[test]
fn test_bid_below_minimum_increment() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);

    for amount in [0u128, ONE_UNIT, 1_500_000, 1_999_999] {
        let result = s.client.try_place_bid(&auction_id, &s.bidder1, &amount);
        assert_eq!(result, Err(Ok(Error::InvalidBid)), "amount {}", amount);
    }

    s.client.place_bid(&auction_id, &s.bidder1, &2_000_000);

    let result = s.client.try_place_bid(&auction_id, &s.bidder2, &2_999_999);
    assert_eq!(result, Err(Ok(Error::InvalidBid)));
    s.client.place_bid(&auction_id, &s.bidder2, &3_000_000);
}

#[test]
fn test_rejected_bid_leaves_state_untouched() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);
    s.client.place_bid(&auction_id, &s.bidder1, &2_000_000);
    let before = s.client.get_auction(&auction_id).unwrap();

    let _ = s.client.try_place_bid(&auction_id, &s.bidder2, &2_500_000);

    assert_eq!(s.client.get_auction(&auction_id).unwrap(), before);
    assert_eq!(s.token.balance(&s.bidder1), INITIAL_BALANCE - 2_000_000);
    assert_eq!(s.token.balance(&s.bidder2), INITIAL_BALANCE);
}

#[test]
fn test_bid_on_missing_auction() {
    let s = setup_test();
    let result = s.client.try_place_bid(&999, &s.bidder1, &2_000_000);
    assert_eq!(result, Err(Ok(Error::NotFound)));
}

#[test]
fn test_bid_at_end_block_accepted_until_closed() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);

    advance_blocks(&s.env, 144);
    assert_eq!(s.client.get_blocks_remaining(&auction_id), 0);
    s.client.place_bid(&auction_id, &s.bidder1, &2_000_000);

    advance_blocks(&s.env, 10);
    s.client.place_bid(&auction_id, &s.bidder2, &3_000_000);

    s.client.end_auction(&auction_id);

    let auction = s.client.get_auction(&auction_id).unwrap();
    assert!(!auction.is_active);
    assert_eq!(auction.current_bid, 3_000_000);
    assert_eq!(auction.highest_bidder, Some(s.bidder2.clone()));
    assert_eq!(s.token.balance(&s.bidder1), INITIAL_BALANCE);
    assert_eq!(s.client.get_escrow_balance(&auction_id), 3_000_000);
}

#[test]
fn test_bid_after_end_auction_fails() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);

    advance_blocks(&s.env, 150);
    s.client.end_auction(&auction_id);

    let result = s.client.try_place_bid(&auction_id, &s.bidder1, &2_000_000);
    assert_eq!(result, Err(Ok(Error::AuctionEnded)));
}

#[test]
fn test_bid_larger_than_balance_fails_atomically() {
    let s = setup_test();
    let auction_id = create_test_auction(&s, 144);
    s.client.place_bid(&auction_id, &s.bidder1, &2_000_000);

    let too_much = INITIAL_BALANCE as u128 + ONE_UNIT;
    assert!(s.client.try_place_bid(&auction_id, &s.bidder2, &too_much).is_err());

    // The refund to bidder1 must have been rolled back with the failed collect.
    let auction = s.client.get_auction(&auction_id).unwrap();
    assert_eq!(auction.highest_bidder, Some(s.bidder1.clone()));
    assert_eq!(s.token.balance(&s.bidder1), INITIAL_BALANCE - 2_000_000);
    assert_eq!(s.token.balance(&s.contract_id), 2_000_000);
}
