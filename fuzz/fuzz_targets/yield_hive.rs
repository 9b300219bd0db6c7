#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use yield_hive::{YieldHiveContract, YieldHiveContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    CreatePool { pool_id: u8, rate: u64 },
    Stake { pool_id: u8, amount: u64 },
    Unstake { pool_id: u8, amount: u64 },
    ClaimRewards { pool_id: u8 },
    Advance { blocks: u16 },
}

/// A host-level failure (`Err(Err(_))`) means a trap slipped past the
/// contract's own checks; typed contract errors are fine.
fn no_trap<T, E, C, I>(result: Result<Result<T, C>, Result<E, I>>) {
    assert!(!matches!(result, Err(Err(_))), "contract trapped");
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(YieldHiveContract, ());
    let client = YieldHiveContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &stake_token, &reward_token);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &i128::MAX);

    let mut users = vec![owner.clone()];
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &stake_token).mint(&user, &(u64::MAX as i128));
        users.push(user);
    }

    let mut block = 0u32;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::CreatePool { pool_id, rate } => {
                no_trap(client.try_create_pool(caller, &u32::from(pool_id), caller, &u128::from(rate)));
            }
            FuzzAction::Stake { pool_id, amount } => {
                no_trap(client.try_stake(caller, &u32::from(pool_id), &u128::from(amount)));
            }
            FuzzAction::Unstake { pool_id, amount } => {
                no_trap(client.try_unstake(caller, &u32::from(pool_id), &u128::from(amount)));
            }
            FuzzAction::ClaimRewards { pool_id } => {
                no_trap(client.try_claim_rewards(caller, &u32::from(pool_id)));
            }
            FuzzAction::Advance { blocks } => {
                block = block.saturating_add(u32::from(blocks));
                env.ledger().set_sequence_number(block);
            }
        }
    }

    // No pool is accrued past the current ledger, and the pools' stake
    // totals are exactly what the contract holds in the stake token.
    let mut staked = 0u128;
    for pool_id in 0..=u8::MAX {
        if let Some(pool) = client.get_pool(&u32::from(pool_id)) {
            assert!(pool.last_accrual_block <= block);
            staked += pool.total_staked;
        }
    }
    let custody = TokenClient::new(&env, &stake_token).balance(&contract_id);
    assert_eq!(i128::try_from(staked).ok(), Some(custody), "stake custody drifted");
});
