use soroban_sdk::{token, Address, Env};

use crate::errors::ContractError;

/// Token amounts cross the SEP-41 boundary as `i128`; accounting is `u128`.
pub fn to_token_amount(amount: u128) -> Result<i128, ContractError> {
    i128::try_from(amount).map_err(|_| ContractError::ArithmeticOverflow)
}

/// Pre-flight check so a short balance surfaces as a typed error rather
/// than a trap inside the token contract.
pub fn ensure_balance(
    env: &Env,
    token: &Address,
    holder: &Address,
    amount: u128,
) -> Result<(), ContractError> {
    let needed = to_token_amount(amount)?;
    if token::Client::new(env, token).balance(holder) < needed {
        return Err(ContractError::InsufficientBalance);
    }
    Ok(())
}

/// Contract-held balance of `token`.
pub fn custody_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

/// Move `amount` from `from` into contract custody.
///
/// A failed transfer aborts the whole invocation, so any storage written
/// earlier in the call is rolled back with it.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: u128) -> Result<(), ContractError> {
    let amount = to_token_amount(amount)?;
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Move `amount` out of contract custody to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), ContractError> {
    let amount = to_token_amount(amount)?;
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
