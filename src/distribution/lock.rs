//! Lock Checker: detects transactions that spend from locked distribution
//! addresses.

use super::partition::Distribution;
use crate::transaction::SpendingAddress;
use std::collections::HashSet;
use tracing::debug;

impl Distribution {
    /// Returns true if any input is owned by a locked distribution address.
    ///
    /// Comparison is exact string equality with no normalisation. Empty input
    /// lists and addresses outside the table are never locked.
    pub fn transaction_is_locked<T: SpendingAddress>(&self, inputs: &[T]) -> bool {
        let locked_addrs = self.locked_addresses();
        let locked: HashSet<&str> = locked_addrs.iter().map(String::as_str).collect();

        for (index, input) in inputs.iter().enumerate() {
            let addr = input.spending_address();
            if locked.contains(addr) {
                debug!("Input {} spends locked distribution address {}", index, addr);
                return true;
            }
        }

        false
    }

    /// Number of inputs owned by locked distribution addresses.
    pub fn count_locked_inputs<T: SpendingAddress>(&self, inputs: &[T]) -> usize {
        let locked_addrs = self.locked_addresses();
        let locked: HashSet<&str> = locked_addrs.iter().map(String::as_str).collect();

        inputs
            .iter()
            .filter(|input| locked.contains(input.spending_address()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::distribution::params::DistributionParams;
    use crate::distribution::partition::Distribution;
    use crate::transaction::UxOut;

    static TABLE: [&str; 4] = ["unlockedA", "unlockedB", "lockedC", "lockedD"];

    fn dist() -> Distribution {
        let params = DistributionParams {
            max_coin_supply: 400,
            addresses_total: 4,
            initial_unlocked_count: 2,
            ..DistributionParams::MAINNET
        };
        Distribution::new(params, &TABLE).unwrap()
    }

    #[test]
    fn test_empty_inputs_not_locked() {
        let inputs: Vec<UxOut> = Vec::new();
        assert!(!dist().transaction_is_locked(&inputs));
        assert_eq!(dist().count_locked_inputs(&inputs), 0);
    }

    #[test]
    fn test_single_locked_input() {
        let inputs = vec![UxOut::new("lockedD", 100)];
        assert!(dist().transaction_is_locked(&inputs));
    }

    #[test]
    fn test_unlocked_inputs_never_locked() {
        let inputs = vec![
            UxOut::new("unlockedA", 100),
            UxOut::new("unlockedB", 100),
            UxOut::new("unlockedA", 1),
        ];
        assert!(!dist().transaction_is_locked(&inputs));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let inputs = vec!["LOCKEDC", "lockedc", " lockedC"];
        assert!(!dist().transaction_is_locked(&inputs));
    }

    #[test]
    fn test_count_reports_every_locked_input() {
        let inputs = vec!["lockedC", "unlockedA", "lockedD", "lockedC", ""];
        assert!(dist().transaction_is_locked(&inputs));
        assert_eq!(dist().count_locked_inputs(&inputs), 3);
    }
}
