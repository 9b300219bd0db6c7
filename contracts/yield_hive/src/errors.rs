// ── Contract errors ──────────────────────────────────────────────────────────

/// Failure codes carried back to callers.
///
/// Codes start at 100 per the shared convention; 100 is the suite-wide
/// "caller is not the contract owner" code.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    // ── Authorization ────────────────────────────────────────
    /// A privileged call came from someone other than the contract owner.
    OwnerOnly = 100,

    // ── Conflict / not-found ─────────────────────────────────
    /// `create_pool` was called with an id that is already registered.
    PoolExists = 101,
    /// The referenced pool was never created.
    PoolNotFound = 102,
    /// The staker has never staked into the referenced pool.
    NoPosition = 103,

    // ── Transfer preconditions ───────────────────────────────
    /// The staker does not hold enough of the stake token.
    InsufficientBalance = 104,

    // ── Validation ───────────────────────────────────────────
    /// Amount must be strictly positive.
    InvalidAmount = 105,

    // ── Arithmetic / invariants ──────────────────────────────
    /// A checked multiplication or addition overflowed.
    ArithmeticOverflow = 106,
    /// Pending reward would be negative or time ran backwards: a checkpoint
    /// was skipped somewhere upstream.
    InvariantViolation = 107,

    // ── Lifecycle ────────────────────────────────────────────
    NotInitialized = 108,
    AlreadyInitialized = 109,
    /// Stake and reward token must be different contracts.
    TokensIdentical = 110,

    // ── Withdrawal / payout ──────────────────────────────────
    /// Unstake amount exceeds the position's staked balance.
    InsufficientStake = 111,
    /// The contract's reward-token balance cannot cover the payout.
    RewardReserveExhausted = 112,
}
