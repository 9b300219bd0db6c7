use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const CONTRACT_OWNER: Symbol = symbol_short!("OWNER");

// ── Core Functions ───────────────────────────────────────────────────────────

/// Records the single administrative identity for the contract.
///
/// Only callable internally during initialisation. The owner is never
/// rotated afterwards, so callers must make sure this runs exactly once.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&CONTRACT_OWNER, owner);
}

/// Returns the contract owner, if one has been set.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&CONTRACT_OWNER)
}

/// Guard: `true` only when `caller` is the stored contract owner.
///
/// An unset owner never matches. The caller must already have been
/// authenticated via `require_auth()`.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}
