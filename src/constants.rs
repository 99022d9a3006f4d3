//! Premine distribution constants.
//!
//! These values are fixed at build time. Nothing in the crate reads them from
//! configuration files or the environment.

/// Maximum coin supply, in whole coins.
pub const MAX_COIN_SUPPLY: u64 = 100_000_000;

/// Number of premine distribution addresses.
pub const DISTRIBUTION_ADDRESSES_TOTAL: u64 = 100;

/// Initial balance of each distribution address (1,000,000 coins).
pub const DISTRIBUTION_ADDRESS_INITIAL_BALANCE: u64 = MAX_COIN_SUPPLY / DISTRIBUTION_ADDRESSES_TOTAL;

/// Number of distribution addresses that are spendable from genesis.
pub const INITIAL_UNLOCKED_COUNT: u64 = 25;

/// Number of addresses to unlock per [`UNLOCK_TIME_INTERVAL`].
///
/// Reserved. No code path unlocks addresses automatically; classification is
/// purely positional.
pub const UNLOCK_ADDRESS_RATE: u64 = 5;

/// Unlock interval in seconds (one year). Reserved, see [`UNLOCK_ADDRESS_RATE`].
pub const UNLOCK_TIME_INTERVAL: u64 = 60 * 60 * 24 * 365;

// A misconfigured build must not produce a binary at all.
const _: () = assert!(
    MAX_COIN_SUPPLY % DISTRIBUTION_ADDRESSES_TOTAL == 0,
    "MAX_COIN_SUPPLY should be perfectly divisible by DISTRIBUTION_ADDRESSES_TOTAL"
);
const _: () = assert!(
    INITIAL_UNLOCKED_COUNT <= DISTRIBUTION_ADDRESSES_TOTAL,
    "INITIAL_UNLOCKED_COUNT cannot exceed DISTRIBUTION_ADDRESSES_TOTAL"
);
