//! Shared utilities for the Yield Hive contract suite.
//!
//! This crate provides:
//! - [`ownership`] — the single contract-owner guard used for privileged calls.
//! - [`ttl`] — storage time-to-live constants and helpers.
//!
//! Contract-specific errors start at code **100**. Code 100 itself is
//! reserved for "caller is not the contract owner" in every contract.

#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod ownership;
pub mod ttl;

pub use ownership::*;
pub use ttl::*;

/// Error code every contract reports when a privileged call comes from
/// anyone other than the contract owner.
pub const OWNER_ONLY_CODE: u32 = 100;
