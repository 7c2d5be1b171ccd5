pub mod bidding_test;

use crate::{AuctionContract, AuctionContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env, String,
};

pub const INITIAL_BALANCE: i128 = 100_000_000;
pub const ONE_UNIT: u128 = 1_000_000;

pub struct Setup {
    pub env: Env,
    pub contract_id: Address,
    pub client: AuctionContractClient<'static>,
    pub owner: Address,
    pub seller: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub token: token::TokenClient<'static>,
}

/// Env with funded seller/bidders and an initialized auction contract.
pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 25,
        sequence_number: 100,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 50_000,
        max_entry_ttl: 3_110_400,
    });

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&seller, &INITIAL_BALANCE);
    token_admin_client.mint(&bidder1, &INITIAL_BALANCE);
    token_admin_client.mint(&bidder2, &INITIAL_BALANCE);

    client.initialize(&owner, &token_address);

    Setup {
        env,
        contract_id,
        client,
        owner,
        seller,
        bidder1,
        bidder2,
        token: token_client,
    }
}

pub fn advance_blocks(env: &Env, blocks: u32) {
    env.ledger().with_mut(|li| {
        li.sequence_number += blocks;
        li.timestamp += blocks as u64 * 5;
    });
}

/// "Test Item" listed by the seller at one unit for `duration` blocks.
pub fn create_test_auction(s: &Setup, duration: u32) -> u64 {
    s.client.create_auction(
        &s.seller,
        &String::from_str(&s.env, "Test Item"),
        &String::from_str(&s.env, "Test Description"),
        &ONE_UNIT,
        &duration,
    )
}

/// Auction that received one 2-unit bid from `bidder1` and has been ended.
pub fn ended_auction_with_bid(s: &Setup) -> u64 {
    let auction_id = create_test_auction(s, 144);
    s.client.place_bid(&auction_id, &s.bidder1, &(2 * ONE_UNIT));
    advance_blocks(&s.env, 145);
    s.client.end_auction(&auction_id);
    auction_id
}
