#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for pool creation access control.
//!
//! Invariants tested:
//! - Only the contract owner can create pools; everyone else gets code 100
//! - A rejected `create_pool` never leaves a pool behind
//! - Re-using a pool id always fails and never touches the stored pool

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use yield_hive::ContractError;

use crate::fixtures::setup;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any pool id and rate, a non-owner caller is rejected with `OwnerOnly`
    /// even when it names the real owner as the pool owner.
    #[test]
    fn prop_non_owner_never_creates(pool_id in any::<u32>(), rate in 0u128..=1_000_000u128) {
        let fx = setup();
        let intruder = Address::generate(&fx.env);

        match fx.client.try_create_pool(&intruder, &pool_id, &fx.owner, &rate) {
            Err(Ok(e)) => {
                prop_assert_eq!(e, ContractError::OwnerOnly);
                prop_assert_eq!(e as u32, 100u32);
            }
            _ => prop_assert!(false, "Expected OwnerOnly error"),
        }
        prop_assert!(fx.client.get_pool(&pool_id).is_none());
        prop_assert_eq!(fx.client.get_pool_count(), 0);
    }

    /// The owner always succeeds on a fresh id, and the stored pool starts empty.
    #[test]
    fn prop_owner_creates_empty_pool(
        pool_id in any::<u32>(),
        rate in 0u128..=1_000_000u128,
        block in 0u32..=100_000u32,
    ) {
        let fx = setup();
        fx.at_block(block);

        prop_assert!(fx.client.create_pool(&fx.owner, &pool_id, &fx.owner, &rate));

        let pool = fx.client.get_pool(&pool_id).unwrap();
        prop_assert_eq!(pool.reward_rate_per_block, rate);
        prop_assert_eq!(pool.total_staked, 0);
        prop_assert_eq!(pool.acc_reward_per_share, 0);
        prop_assert_eq!(pool.last_accrual_block, block);
    }

    /// A duplicate id fails with `PoolExists` and leaves every field intact.
    #[test]
    fn prop_duplicate_id_is_rejected(
        pool_id in any::<u32>(),
        first_rate in 0u128..=1_000u128,
        second_rate in 0u128..=1_000u128,
    ) {
        let fx = setup();
        fx.client.create_pool(&fx.owner, &pool_id, &fx.owner, &first_rate);
        let before = fx.client.get_pool(&pool_id).unwrap();

        let other = Address::generate(&fx.env);
        match fx.client.try_create_pool(&fx.owner, &pool_id, &other, &second_rate) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::PoolExists),
            _ => prop_assert!(false, "Expected PoolExists error"),
        }
        prop_assert_eq!(fx.client.get_pool(&pool_id).unwrap(), before);
        prop_assert_eq!(fx.client.get_pool_count(), 1);
    }
}
