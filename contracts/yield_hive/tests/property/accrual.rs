#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for reward accrual.
//!
//! Invariants tested:
//! - A sole staker is paid `blocks × rate`, short by at most one unit
//! - A second claim in the same ledger always pays exactly zero
//! - `get_pending_rewards` always equals what `claim_rewards` then pays
//! - Two stakers split emissions pro rata, never over-paying in total

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::fixtures::setup;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sole_staker_conservation(
        rate in 0u128..=1_000_000u128,
        amount in 1u128..=1_000_000_000u128,
        blocks in 1u32..=5_000u32,
    ) {
        let fx = setup();
        let staker = Address::generate(&fx.env);
        fx.mint_stake(&staker, amount as i128);

        fx.client.create_pool(&fx.owner, &1, &fx.owner, &rate);
        fx.client.stake(&staker, &1, &amount);

        fx.at_block(blocks);
        let expected = rate * blocks as u128;
        let pending = fx.client.get_pending_rewards(&staker, &1);
        let claimed = fx.client.claim_rewards(&staker, &1);

        prop_assert_eq!(pending, claimed);
        prop_assert!(claimed <= expected, "over-paid: {} > {}", claimed, expected);
        prop_assert!(claimed + 1 >= expected, "under-paid: {} < {}", claimed, expected);

        prop_assert_eq!(fx.client.claim_rewards(&staker, &1), 0);
    }

    #[test]
    fn prop_two_stakers_split_pro_rata(
        rate in 1u128..=10_000u128,
        a in 1u128..=1_000_000u128,
        b in 1u128..=1_000_000u128,
        blocks in 1u32..=1_000u32,
    ) {
        let fx = setup();
        let alice = Address::generate(&fx.env);
        let bob = Address::generate(&fx.env);
        fx.mint_stake(&alice, a as i128);
        fx.mint_stake(&bob, b as i128);

        fx.client.create_pool(&fx.owner, &1, &fx.owner, &rate);
        fx.client.stake(&alice, &1, &a);
        fx.client.stake(&bob, &1, &b);

        fx.at_block(blocks);
        let emitted = rate * blocks as u128;
        let paid_a = fx.client.claim_rewards(&alice, &1);
        let paid_b = fx.client.claim_rewards(&bob, &1);

        prop_assert!(paid_a + paid_b <= emitted);
        prop_assert!(paid_a + paid_b + 2 >= emitted);

        // Each share is within one unit of its exact pro-rata amount.
        let exact_a = emitted * a / (a + b);
        prop_assert!(paid_a <= exact_a && paid_a + 1 >= exact_a);
    }
}
