use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers remaining before an entry's TTL gets bumped (~30 days).
pub const TTL_THRESHOLD: u32 = 518_400;
/// Ledgers an entry lives after a bump (~60 days).
pub const TTL_EXTEND_TO: u32 = 1_036_800;

/// Keep the contract instance (config, owner, counters) alive.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Keep a persistent entry alive. The key must already exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
