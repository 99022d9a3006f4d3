//! Premine distribution: the address table, its locked/unlocked partition and
//! the locked-spend check.
//!
//! The free functions operate on the built-in mainnet distribution. Hosting
//! applications should call [`init`] once during startup, before validating any
//! transaction; the free functions call it themselves as well.

pub mod lock;
pub mod params;
pub mod partition;
pub mod table;

pub use params::{assert_startup_invariants, DistributionParams};
pub use partition::Distribution;
pub use table::all_addresses;

use crate::transaction::SpendingAddress;
use once_cell::sync::OnceCell;
use tracing::debug;

static MAINNET: OnceCell<Distribution> = OnceCell::new();

/// Runs the startup invariant check once and returns the mainnet distribution.
///
/// # Panics
///
/// Panics if the built-in parameters are inconsistent with each other or with
/// the table. There is no degraded mode for a misconfigured build.
pub fn init() -> &'static Distribution {
    MAINNET.get_or_init(|| {
        let params = DistributionParams::MAINNET;
        assert_startup_invariants(&params, table::DISTRIBUTION_ADDRESSES.len());
        debug!(
            "Distribution initialised: {} addresses, {} unlocked, {} locked",
            params.addresses_total,
            params.initial_unlocked_count,
            params.locked_count()
        );
        match Distribution::new(params, &table::DISTRIBUTION_ADDRESSES) {
            Ok(dist) => dist,
            Err(e) => panic!("{}", e),
        }
    })
}

/// All distribution addresses, in canonical order.
pub fn distribution_addresses() -> Vec<String> {
    init().addresses()
}

/// Distribution addresses whose outputs are spendable.
pub fn unlocked_distribution_addresses() -> Vec<String> {
    init().unlocked_addresses()
}

/// Distribution addresses whose outputs cannot be spent.
pub fn locked_distribution_addresses() -> Vec<String> {
    init().locked_addresses()
}

/// Returns true if the transaction spends outputs owned by a locked
/// distribution address.
pub fn transaction_is_locked<T: SpendingAddress>(inputs: &[T]) -> bool {
    init().transaction_is_locked(inputs)
}
