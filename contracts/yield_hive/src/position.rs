use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;

// Per-staker persistent storage uses tuple keys:  (POS, staker, pool_id)
const POSITION: Symbol = symbol_short!("POS");

/// One staker's stake and reward checkpoint within one pool.
///
/// Positions are never removed. A full unstake leaves a zeroed record so
/// lookups keep distinguishing "withdrew everything" from "never staked".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub staker: Address,
    pub pool_id: u32,
    pub amount: u128,
    /// `amount * acc_reward_per_share` at the last checkpoint, in the same
    /// `PRECISION` scale as the accumulator.
    pub reward_debt: u128,
    /// Rewards settled at a checkpoint but not yet paid, `PRECISION`-scaled
    /// like `reward_debt`. After a claim only the sub-unit remainder is left.
    pub unclaimed: u128,
}

impl Position {
    pub fn empty(staker: Address, pool_id: u32) -> Self {
        Self {
            staker,
            pool_id,
            amount: 0,
            reward_debt: 0,
            unclaimed: 0,
        }
    }
}

fn position_key(staker: &Address, pool_id: u32) -> (Symbol, Address, u32) {
    (POSITION, staker.clone(), pool_id)
}

pub fn load(env: &Env, staker: &Address, pool_id: u32) -> Option<Position> {
    let key = position_key(staker, pool_id);
    let position: Option<Position> = env.storage().persistent().get(&key);
    if position.is_some() {
        ttl::extend_persistent(env, &key);
    }
    position
}

/// Like [`load`] but maps a miss to `NoPosition`.
pub fn require(env: &Env, staker: &Address, pool_id: u32) -> Result<Position, ContractError> {
    load(env, staker, pool_id).ok_or(ContractError::NoPosition)
}

pub fn save(env: &Env, position: &Position) {
    let key = position_key(&position.staker, position.pool_id);
    env.storage().persistent().set(&key, position);
    ttl::extend_persistent(env, &key);
}
