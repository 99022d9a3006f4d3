//! Distribution parameters and the startup invariant check.

use crate::constants::{
    DISTRIBUTION_ADDRESSES_TOTAL, INITIAL_UNLOCKED_COUNT, MAX_COIN_SUPPLY, UNLOCK_ADDRESS_RATE,
    UNLOCK_TIME_INTERVAL,
};
use crate::error::{DistributionError, Result};
use serde::Serialize;
use tracing::error;

/// The distribution constants bundled as a value so a [`Distribution`](super::Distribution)
/// can be built (and rejected) from something other than the built-in numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributionParams {
    pub max_coin_supply: u64,
    pub addresses_total: u64,
    pub initial_unlocked_count: u64,
    /// Reserved, no behaviour attached.
    pub unlock_address_rate: u64,
    /// Reserved, seconds. No behaviour attached.
    pub unlock_time_interval: u64,
}

impl DistributionParams {
    /// The parameters the crate is built with.
    pub const MAINNET: DistributionParams = DistributionParams {
        max_coin_supply: MAX_COIN_SUPPLY,
        addresses_total: DISTRIBUTION_ADDRESSES_TOTAL,
        initial_unlocked_count: INITIAL_UNLOCKED_COUNT,
        unlock_address_rate: UNLOCK_ADDRESS_RATE,
        unlock_time_interval: UNLOCK_TIME_INTERVAL,
    };

    /// Checks the supply split and the partition boundary.
    pub fn validate(&self) -> Result<()> {
        if self.addresses_total == 0 || self.max_coin_supply % self.addresses_total != 0 {
            return Err(DistributionError::IndivisibleSupply {
                supply: self.max_coin_supply,
                total: self.addresses_total,
            });
        }
        if self.initial_unlocked_count > self.addresses_total {
            return Err(DistributionError::UnlockedCountOutOfRange {
                unlocked: self.initial_unlocked_count,
                total: self.addresses_total,
            });
        }
        Ok(())
    }

    /// Like [`validate`](Self::validate), but also requires `table_len` to match
    /// `addresses_total`.
    pub fn validate_for_table(&self, table_len: usize) -> Result<()> {
        self.validate()?;
        if table_len as u64 != self.addresses_total {
            return Err(DistributionError::TableLength {
                expected: self.addresses_total,
                actual: table_len,
            });
        }
        Ok(())
    }

    /// Initial balance of a single distribution address.
    ///
    /// Only meaningful for parameters that passed [`validate`](Self::validate).
    pub fn initial_balance(&self) -> u64 {
        self.max_coin_supply / self.addresses_total
    }

    /// Number of addresses in the locked suffix.
    pub fn locked_count(&self) -> u64 {
        self.addresses_total - self.initial_unlocked_count
    }
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self::MAINNET
    }
}

/// Aborts initialisation if `params` violate the startup invariants.
///
/// A violation is a build configuration defect with no degraded mode, so this
/// panics instead of returning.
pub fn assert_startup_invariants(params: &DistributionParams, table_len: usize) {
    if let Err(e) = params.validate_for_table(table_len) {
        error!("Distribution startup invariant violated: {}", e);
        panic!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params_are_valid() {
        assert!(DistributionParams::MAINNET.validate().is_ok());
        assert_eq!(DistributionParams::MAINNET.initial_balance(), 1_000_000);
        assert_eq!(DistributionParams::MAINNET.locked_count(), 75);
    }

    #[test]
    fn test_indivisible_supply_rejected() {
        let params = DistributionParams {
            max_coin_supply: 100_000_001,
            ..DistributionParams::MAINNET
        };
        match params.validate() {
            Err(DistributionError::IndivisibleSupply { supply, total }) => {
                assert_eq!(supply, 100_000_001);
                assert_eq!(total, 100);
            }
            other => panic!("Expected IndivisibleSupply, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_addresses_rejected() {
        let params = DistributionParams {
            addresses_total: 0,
            initial_unlocked_count: 0,
            ..DistributionParams::MAINNET
        };
        assert!(matches!(
            params.validate(),
            Err(DistributionError::IndivisibleSupply { .. })
        ));
    }

    #[test]
    fn test_unlocked_count_boundaries() {
        let all_unlocked = DistributionParams {
            initial_unlocked_count: 100,
            ..DistributionParams::MAINNET
        };
        assert!(all_unlocked.validate().is_ok());
        assert_eq!(all_unlocked.locked_count(), 0);

        let none_unlocked = DistributionParams {
            initial_unlocked_count: 0,
            ..DistributionParams::MAINNET
        };
        assert!(none_unlocked.validate().is_ok());

        let too_many = DistributionParams {
            initial_unlocked_count: 101,
            ..DistributionParams::MAINNET
        };
        assert!(matches!(
            too_many.validate(),
            Err(DistributionError::UnlockedCountOutOfRange { unlocked: 101, total: 100 })
        ));
    }

    #[test]
    fn test_table_length_mismatch_rejected() {
        let result = DistributionParams::MAINNET.validate_for_table(99);
        assert!(matches!(
            result,
            Err(DistributionError::TableLength { expected: 100, actual: 99 })
        ));
    }

    #[test]
    #[should_panic(expected = "perfectly divisible")]
    fn test_startup_assertion_aborts_on_indivisible_supply() {
        let params = DistributionParams {
            max_coin_supply: 100_000_050,
            ..DistributionParams::MAINNET
        };
        assert_startup_invariants(&params, 100);
    }
}
