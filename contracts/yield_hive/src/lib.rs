#![no_std]

pub mod errors;
pub mod events;
pub mod gateway;
pub mod pool;
pub mod position;
pub mod rewards;

use common::{ownership, ttl};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

pub use errors::ContractError;
pub use pool::Pool;
pub use position::Position;

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Token wiring fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Asset users deposit into every pool.
    pub stake_token: Address,
    /// Asset pools emit; the contract must be funded with it.
    pub reward_token: Address,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct YieldHiveContract;

#[contractimpl]
impl YieldHiveContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner`        – the only identity allowed to create pools; immutable.
    /// * `stake_token`  – SAC address of the token users stake.
    /// * `reward_token` – SAC address of the token pools pay out.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }

        let config = Config {
            stake_token: stake_token.clone(),
            reward_token: reward_token.clone(),
        };
        env.storage().instance().set(&CONFIG, &config);
        ownership::set_owner(&env, &owner);
        ttl::extend_instance(&env);

        events::publish_initialized(&env, owner, stake_token, reward_token);

        Ok(())
    }

    // ── Pools ───────────────────────────────────────────────────────────────

    /// Register pool `pool_id` emitting `reward_rate` per ledger.
    ///
    /// Only the contract owner may call this; `owner` is recorded on the pool
    /// but grants nothing.
    pub fn create_pool(
        env: Env,
        caller: Address,
        pool_id: u32,
        owner: Address,
        reward_rate: u128,
    ) -> Result<bool, ContractError> {
        Self::load_config(&env)?;
        caller.require_auth();
        if !ownership::is_owner(&env, &caller) {
            return Err(ContractError::OwnerOnly);
        }

        let pool = pool::create(&env, pool_id, owner, reward_rate, env.ledger().sequence())?;
        ttl::extend_instance(&env);

        events::publish_pool_created(&env, pool.id, pool.owner, pool.reward_rate_per_block);

        Ok(true)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens into `pool_id`.
    ///
    /// The pool is accrued and any existing position checkpointed first so the
    /// new tokens never earn retroactively. Rewards pending at that moment
    /// are parked, still scaled, in `unclaimed` and paid by the next
    /// `claim_rewards`.
    pub fn stake(
        env: Env,
        staker: Address,
        pool_id: u32,
        amount: u128,
    ) -> Result<bool, ContractError> {
        let config = Self::load_config(&env)?;
        staker.require_auth();

        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }

        // 1. Bring the pool current.
        let mut pool = Self::accrued_pool(&env, pool_id)?;
        gateway::ensure_balance(&env, &config.stake_token, &staker, amount)?;

        // 2. Checkpoint, then grow the position and the pool total.
        let existing = position::load(&env, &staker, pool_id)
            .unwrap_or_else(|| Position::empty(staker.clone(), pool_id));
        let mut position = rewards::settle(&existing, &pool)?;

        position.amount = position
            .amount
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.reward_debt =
            rewards::reward_debt_for(position.amount, pool.acc_reward_per_share)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        pool::save(&env, &pool);
        position::save(&env, &position);
        ttl::extend_instance(&env);

        // 3. Pull tokens last (checks-effects-interactions).
        gateway::pull(&env, &config.stake_token, &staker, amount)?;

        events::publish_staked(&env, pool_id, staker, amount, pool.total_staked);

        Ok(true)
    }

    /// Withdraw `amount` stake tokens from `pool_id`.
    ///
    /// Rewards earned up to now stay claimable. Withdrawing everything leaves
    /// a zeroed position behind rather than deleting it.
    pub fn unstake(
        env: Env,
        staker: Address,
        pool_id: u32,
        amount: u128,
    ) -> Result<bool, ContractError> {
        let config = Self::load_config(&env)?;
        staker.require_auth();

        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut pool = Self::accrued_pool(&env, pool_id)?;
        let existing = position::require(&env, &staker, pool_id)?;
        if existing.amount < amount {
            return Err(ContractError::InsufficientStake);
        }

        let mut position = rewards::settle(&existing, &pool)?;
        position.amount = position
            .amount
            .checked_sub(amount)
            .ok_or(ContractError::InvariantViolation)?;
        position.reward_debt =
            rewards::reward_debt_for(position.amount, pool.acc_reward_per_share)?;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::InvariantViolation)?;

        pool::save(&env, &pool);
        position::save(&env, &position);
        ttl::extend_instance(&env);

        gateway::push(&env, &config.stake_token, &staker, amount)?;

        events::publish_unstaked(&env, pool_id, staker, amount, pool.total_staked);

        Ok(true)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `staker` has earned in `pool_id` and return it.
    ///
    /// A claim with nothing owed succeeds with `0` and moves no tokens.
    pub fn claim_rewards(env: Env, staker: Address, pool_id: u32) -> Result<u128, ContractError> {
        let config = Self::load_config(&env)?;
        staker.require_auth();

        // 1. Sync the accumulator.
        let pool = Self::accrued_pool(&env, pool_id)?;
        let existing = position::require(&env, &staker, pool_id)?;

        // 2. Checkpoint: whole units are paid, the sub-unit remainder carries.
        let (position, reward) = rewards::checkpoint_claim(&existing, &pool)?;
        if reward > 0
            && gateway::custody_balance(&env, &config.reward_token)
                < gateway::to_token_amount(reward)?
        {
            return Err(ContractError::RewardReserveExhausted);
        }

        pool::save(&env, &pool);
        position::save(&env, &position);
        ttl::extend_instance(&env);

        if reward > 0 {
            gateway::push(&env, &config.reward_token, &staker, reward)?;
            events::publish_reward_claimed(&env, pool_id, staker, reward);
        }

        Ok(reward)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the position of `staker` in `pool_id`, if they ever staked there.
    pub fn get_position(env: Env, staker: Address, pool_id: u32) -> Option<Position> {
        position::load(&env, &staker, pool_id)
    }

    /// Return the stored pool record. The accumulator reflects the last
    /// mutating call, not the current ledger.
    pub fn get_pool(env: Env, pool_id: u32) -> Option<Pool> {
        pool::load(&env, pool_id)
    }

    /// Number of pools created so far.
    pub fn get_pool_count(env: Env) -> u32 {
        pool::count(&env)
    }

    /// What `claim_rewards` would pay if called at the current ledger.
    pub fn get_pending_rewards(
        env: Env,
        staker: Address,
        pool_id: u32,
    ) -> Result<u128, ContractError> {
        let pool = Self::accrued_pool(&env, pool_id)?;
        let position = position::require(&env, &staker, pool_id)?;
        rewards::claimable(&position, &pool)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&CONFIG)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownership::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        Self::load_config(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_config(env: &Env) -> Result<Config, ContractError> {
        env.storage()
            .instance()
            .get(&CONFIG)
            .ok_or(ContractError::NotInitialized)
    }

    /// Load `pool_id` and accrue it to the current ledger without persisting.
    fn accrued_pool(env: &Env, pool_id: u32) -> Result<Pool, ContractError> {
        let stored = pool::require(env, pool_id)?;
        rewards::accrue(&stored, env.ledger().sequence())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
