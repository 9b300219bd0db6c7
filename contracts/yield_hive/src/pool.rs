use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;
use crate::rewards::PRECISION;

// Persistent storage uses tuple keys:  (POOL, pool_id)
const POOL: Symbol = symbol_short!("POOL");
const POOL_COUNT: Symbol = symbol_short!("POOL_CNT");

/// A staking bucket with its own emission rate and accrual index.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub id: u32,
    /// Owner recorded at creation. Informational only; privileged calls are
    /// gated on the contract owner, not on this field.
    pub owner: Address,
    /// Reward units emitted per ledger across all stakers of this pool.
    pub reward_rate_per_block: u128,
    pub total_staked: u128,
    /// Cumulative reward per staked unit since inception, scaled by `PRECISION`.
    pub acc_reward_per_share: u128,
    /// Ledger sequence at which `acc_reward_per_share` was last brought current.
    pub last_accrual_block: u32,
    pub created_at: u32,
}

fn pool_key(id: u32) -> (Symbol, u32) {
    (POOL, id)
}

pub fn load(env: &Env, id: u32) -> Option<Pool> {
    let key = pool_key(id);
    let pool: Option<Pool> = env.storage().persistent().get(&key);
    if pool.is_some() {
        ttl::extend_persistent(env, &key);
    }
    pool
}

/// Like [`load`] but maps a miss to `PoolNotFound`.
pub fn require(env: &Env, id: u32) -> Result<Pool, ContractError> {
    load(env, id).ok_or(ContractError::PoolNotFound)
}

pub fn save(env: &Env, pool: &Pool) {
    let key = pool_key(pool.id);
    env.storage().persistent().set(&key, pool);
    ttl::extend_persistent(env, &key);
}

pub fn exists(env: &Env, id: u32) -> bool {
    env.storage().persistent().has(&pool_key(id))
}

/// Number of pools ever registered.
pub fn count(env: &Env) -> u32 {
    env.storage().instance().get(&POOL_COUNT).unwrap_or(0)
}

/// Register a fresh pool starting its accrual clock at `current_block`.
///
/// Authorization is the caller's job; this only enforces uniqueness and that
/// a single ledger of emissions can be scaled without overflow.
pub fn create(
    env: &Env,
    id: u32,
    owner: Address,
    reward_rate_per_block: u128,
    current_block: u32,
) -> Result<Pool, ContractError> {
    if exists(env, id) {
        return Err(ContractError::PoolExists);
    }
    reward_rate_per_block
        .checked_mul(PRECISION)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let pool = Pool {
        id,
        owner,
        reward_rate_per_block,
        total_staked: 0,
        acc_reward_per_share: 0,
        last_accrual_block: current_block,
        created_at: current_block,
    };
    save(env, &pool);

    let next = count(env).saturating_add(1);
    env.storage().instance().set(&POOL_COUNT, &next);

    Ok(pool)
}
