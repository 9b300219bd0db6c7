#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub block: u32,
}

/// Fired when the contract owner registers a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreatedEvent {
    pub pool_id: u32,
    pub owner: Address,
    pub reward_rate_per_block: u128,
    pub block: u32,
}

/// Fired when a user deposits stake into a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub pool_id: u32,
    pub staker: Address,
    pub amount: u128,
    pub new_total_staked: u128,
    pub block: u32,
}

/// Fired when a user withdraws stake from a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub pool_id: u32,
    pub staker: Address,
    pub amount: u128,
    pub new_total_staked: u128,
    pub block: u32,
}

/// Fired when a user claims a non-zero reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub pool_id: u32,
    pub staker: Address,
    pub amount: u128,
    pub block: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, stake_token: Address, reward_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            stake_token,
            reward_token,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_created(env: &Env, pool_id: u32, owner: Address, reward_rate_per_block: u128) {
    env.events().publish(
        (symbol_short!("POOL_NEW"), pool_id),
        PoolCreatedEvent {
            pool_id,
            owner,
            reward_rate_per_block,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    pool_id: u32,
    staker: Address,
    amount: u128,
    new_total_staked: u128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone(), pool_id),
        StakedEvent {
            pool_id,
            staker,
            amount,
            new_total_staked,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    pool_id: u32,
    staker: Address,
    amount: u128,
    new_total_staked: u128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone(), pool_id),
        UnstakedEvent {
            pool_id,
            staker,
            amount,
            new_total_staked,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, pool_id: u32, staker: Address, amount: u128) {
    env.events().publish(
        (symbol_short!("CLMD"), staker.clone(), pool_id),
        RewardClaimedEvent {
            pool_id,
            staker,
            amount,
            block: env.ledger().sequence(),
        },
    );
}
