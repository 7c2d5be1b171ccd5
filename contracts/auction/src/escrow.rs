use soroban_sdk::{token, Address, Env};

use crate::errors::Error;

/// Moves funds between callers and the contract's own balance.
///
/// The auction state machine only talks to this trait, so it stays free of
/// token-client details and can be driven by an in-memory fake in tests.
pub trait Escrow {
    /// Pull `amount` from `from` into contract custody.
    fn collect(&self, from: &Address, amount: u128) -> Result<(), Error>;

    /// Pay `amount` out of contract custody to `to`.
    fn release(&self, to: &Address, amount: u128) -> Result<(), Error>;
}

/// Escrow backed by the Soroban token contract configured at initialization.
pub struct TokenEscrow<'a> {
    env: &'a Env,
    token: token::TokenClient<'a>,
}

impl<'a> TokenEscrow<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        Self {
            env,
            token: token::TokenClient::new(env, token),
        }
    }
}

impl Escrow for TokenEscrow<'_> {
    fn collect(&self, from: &Address, amount: u128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_token_amount(amount)?;
        self.token
            .transfer(from, &self.env.current_contract_address(), &amount);
        Ok(())
    }

    fn release(&self, to: &Address, amount: u128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_token_amount(amount)?;
        self.token
            .transfer(&self.env.current_contract_address(), to, &amount);
        Ok(())
    }
}

/// Token amounts are `i128`; ledger amounts are unsigned.
fn to_token_amount(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)
}
