//! Reward accrual engine.
//!
//! Pure functions over [`Pool`] and [`Position`] values: nothing here touches
//! storage, so callers persist whatever comes back. All arithmetic is
//! unsigned and checked; an overflow fails the operation instead of wrapping
//! or saturating into a wrong payout.

use crate::errors::ContractError;
use crate::pool::Pool;
use crate::position::Position;

/// Fixed-point scaling factor for `acc_reward_per_share` and `reward_debt`.
///
/// 10^12 keeps per-accrual truncation below one reward unit for any pool
/// whose total stake is at most 10^12 units, and still leaves ~10^26 of
/// headroom in a `u128` for the scaled products.
pub const PRECISION: u128 = 1_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Advance an accumulator by `elapsed` ledgers of emission.
///
/// ```text
/// Δacc = elapsed × rate × PRECISION / total_staked
/// ```
///
/// Division truncates toward zero, so rounding dust stays with the pool and
/// early claimants are never paid ahead of late ones. With nobody staked the
/// accumulator is returned unchanged: those emissions go to nobody.
pub fn accumulate(
    acc_reward_per_share: u128,
    reward_rate_per_block: u128,
    elapsed: u32,
    total_staked: u128,
) -> Result<u128, ContractError> {
    if elapsed == 0 || total_staked == 0 {
        return Ok(acc_reward_per_share);
    }

    let emitted = u128::from(elapsed)
        .checked_mul(reward_rate_per_block)
        .and_then(|v| v.checked_mul(PRECISION))
        .ok_or(ContractError::ArithmeticOverflow)?;

    // Truncating division; total_staked > 0 checked above.
    let delta = emitted / total_staked;

    acc_reward_per_share
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Bring `pool` current to `current_block`.
///
/// `last_accrual_block` always moves to `current_block`, including when the
/// pool is empty, so emissions for an empty stretch are never banked.
pub fn accrue(pool: &Pool, current_block: u32) -> Result<Pool, ContractError> {
    let elapsed = current_block
        .checked_sub(pool.last_accrual_block)
        .ok_or(ContractError::InvariantViolation)?;
    if elapsed == 0 {
        return Ok(pool.clone());
    }

    let mut next = pool.clone();
    next.acc_reward_per_share = accumulate(
        pool.acc_reward_per_share,
        pool.reward_rate_per_block,
        elapsed,
        pool.total_staked,
    )?;
    next.last_accrual_block = current_block;
    Ok(next)
}

/// Checked `amount × acc`, the scaled value stored as `reward_debt`.
pub fn reward_debt_for(amount: u128, acc_reward_per_share: u128) -> Result<u128, ContractError> {
    amount
        .checked_mul(acc_reward_per_share)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Scaled rewards accrued since the last checkpoint: `amount × acc − reward_debt`.
///
/// A negative difference means a checkpoint was missed and is reported, not
/// clamped.
fn owed_scaled(position: &Position, pool: &Pool) -> Result<u128, ContractError> {
    reward_debt_for(position.amount, pool.acc_reward_per_share)?
        .checked_sub(position.reward_debt)
        .ok_or(ContractError::InvariantViolation)
}

/// Rewards accrued since the position's last checkpoint.
///
/// ```text
/// pending = (amount × acc − reward_debt) / PRECISION
/// ```
///
/// The difference is taken in the scaled domain and truncated once.
pub fn pending_reward(position: &Position, pool: &Pool) -> Result<u128, ContractError> {
    Ok(owed_scaled(position, pool)? / PRECISION)
}

/// Scaled total owed to `position`: settled credit plus pending.
fn total_scaled(position: &Position, pool: &Pool) -> Result<u128, ContractError> {
    owed_scaled(position, pool)?
        .checked_add(position.unclaimed)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Everything `position` could be paid right now, in whole reward units.
pub fn claimable(position: &Position, pool: &Pool) -> Result<u128, ContractError> {
    Ok(total_scaled(position, pool)? / PRECISION)
}

/// Checkpoint: fold the scaled pending amount into `unclaimed` and reset the
/// debt to the pool's current accumulator. `pool` must already be accrued.
///
/// Nothing is truncated here, so sub-unit earnings survive any number of
/// checkpoints.
pub fn settle(position: &Position, pool: &Pool) -> Result<Position, ContractError> {
    let mut next = position.clone();
    next.unclaimed = total_scaled(position, pool)?;
    next.reward_debt = reward_debt_for(position.amount, pool.acc_reward_per_share)?;
    Ok(next)
}

/// Claim checkpoint: returns the settled position and the whole units to pay.
///
/// Only whole units leave; the sub-unit remainder (`< PRECISION`) stays in
/// `unclaimed` for the next claim.
pub fn checkpoint_claim(position: &Position, pool: &Pool) -> Result<(Position, u128), ContractError> {
    let mut next = settle(position, pool)?;
    let payout = next.unclaimed / PRECISION;
    next.unclaimed %= PRECISION;
    Ok((next, payout))
}

// ── Unit tests ──────────────────────────────────────────────────────────────
