//! Shared fixtures for the property suites.

use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};
use yield_hive::{YieldHiveContract, YieldHiveContractClient};

pub struct Fixture {
    pub env: Env,
    pub client: YieldHiveContractClient<'static>,
    pub owner: Address,
    pub stake_token: Address,
}

impl Fixture {
    pub fn mint_stake(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.stake_token).mint(to, &amount);
    }

    pub fn at_block(&self, block: u32) {
        self.env.ledger().set_sequence_number(block);
    }
}

/// Initialized contract with a well-funded reward reserve, sitting at ledger 0.
pub fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(0);

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

    Fixture {
        env,
        client,
        owner,
        stake_token,
    }
}
