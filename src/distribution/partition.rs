//! Address Partitioner: splits the distribution table into an unlocked prefix
//! and a locked suffix.

use super::params::DistributionParams;
use crate::error::Result;

/// A validated distribution: parameters plus the table they describe.
///
/// The partition is a pure index split at `initial_unlocked_count`, recomputed
/// on every call. Every getter hands back freshly allocated strings, so callers
/// never alias the table.
#[derive(Debug, Clone, Copy)]
pub struct Distribution {
    params: DistributionParams,
    table: &'static [&'static str],
}

impl Distribution {
    /// Validates `params` against `table` and builds the distribution.
    pub fn new(params: DistributionParams, table: &'static [&'static str]) -> Result<Self> {
        params.validate_for_table(table.len())?;
        Ok(Self { params, table })
    }

    pub fn params(&self) -> &DistributionParams {
        &self.params
    }

    /// Initial balance of each distribution address.
    pub fn initial_balance(&self) -> u64 {
        self.params.initial_balance()
    }

    /// All addresses, in canonical order.
    pub fn addresses(&self) -> Vec<String> {
        self.table.iter().map(|a| a.to_string()).collect()
    }

    /// The first `initial_unlocked_count` addresses, in canonical order.
    pub fn unlocked_addresses(&self) -> Vec<String> {
        self.table[..self.boundary()]
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    /// Every address after the unlocked prefix, in canonical order.
    pub fn locked_addresses(&self) -> Vec<String> {
        self.table[self.boundary()..]
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    /// Whether the address at `index` in the table is locked. `None` past the end.
    pub fn is_locked_index(&self, index: usize) -> Option<bool> {
        (index < self.table.len()).then(|| index >= self.boundary())
    }

    // `new` guarantees initial_unlocked_count <= table.len()
    fn boundary(&self) -> usize {
        self.params.initial_unlocked_count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::table::DISTRIBUTION_ADDRESSES;
    use crate::error::DistributionError;
    use std::collections::HashSet;

    static SMALL_TABLE: [&str; 4] = ["a1", "a2", "a3", "a4"];

    fn small_params(unlocked: u64) -> DistributionParams {
        DistributionParams {
            max_coin_supply: 400,
            addresses_total: 4,
            initial_unlocked_count: unlocked,
            ..DistributionParams::MAINNET
        }
    }

    #[test]
    fn test_mainnet_partition_sizes() {
        let dist = Distribution::new(DistributionParams::MAINNET, &DISTRIBUTION_ADDRESSES).unwrap();
        assert_eq!(dist.addresses().len(), 100);
        assert_eq!(dist.unlocked_addresses().len(), 25);
        assert_eq!(dist.locked_addresses().len(), 75);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let dist = Distribution::new(DistributionParams::MAINNET, &DISTRIBUTION_ADDRESSES).unwrap();
        let unlocked: HashSet<String> = dist.unlocked_addresses().into_iter().collect();
        let locked: HashSet<String> = dist.locked_addresses().into_iter().collect();
        let all: HashSet<String> = dist.addresses().into_iter().collect();

        assert!(unlocked.is_disjoint(&locked));
        let union: HashSet<String> = unlocked.union(&locked).cloned().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn test_boundary_is_exact() {
        let dist = Distribution::new(small_params(1), &SMALL_TABLE).unwrap();
        assert_eq!(dist.unlocked_addresses(), vec!["a1"]);
        assert_eq!(dist.locked_addresses(), vec!["a2", "a3", "a4"]);
        assert_eq!(dist.is_locked_index(0), Some(false));
        assert_eq!(dist.is_locked_index(1), Some(true));
        assert_eq!(dist.is_locked_index(4), None);
    }

    #[test]
    fn test_degenerate_boundaries() {
        let none_unlocked = Distribution::new(small_params(0), &SMALL_TABLE).unwrap();
        assert!(none_unlocked.unlocked_addresses().is_empty());
        assert_eq!(none_unlocked.locked_addresses().len(), 4);

        let all_unlocked = Distribution::new(small_params(4), &SMALL_TABLE).unwrap();
        assert_eq!(all_unlocked.unlocked_addresses().len(), 4);
        assert!(all_unlocked.locked_addresses().is_empty());
    }

    #[test]
    fn test_table_length_must_match_params() {
        let result = Distribution::new(DistributionParams::MAINNET, &SMALL_TABLE);
        assert!(matches!(result, Err(DistributionError::TableLength { .. })));
    }

    #[test]
    fn test_getters_return_independent_copies() {
        let dist = Distribution::new(small_params(2), &SMALL_TABLE).unwrap();
        let mut locked = dist.locked_addresses();
        locked[0] = "a1".to_string();
        locked.push("a9".to_string());

        assert_eq!(dist.locked_addresses(), vec!["a3", "a4"]);
        assert_eq!(dist.unlocked_addresses(), vec!["a1", "a2"]);
    }
}
