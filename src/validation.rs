use crate::distribution::{self, Distribution};
use crate::error::DistributionError;
use crate::transaction::SpendingAddress;
use tracing::warn;

/// Rejects a transaction whose inputs spend from locked distribution addresses.
pub fn verify_inputs_unlocked<T: SpendingAddress>(inputs: &[T]) -> Result<(), DistributionError> {
    verify_inputs_unlocked_with(distribution::init(), inputs)
}

/// Same as [`verify_inputs_unlocked`] against an explicit distribution.
pub fn verify_inputs_unlocked_with<T: SpendingAddress>(
    dist: &Distribution,
    inputs: &[T],
) -> Result<(), DistributionError> {
    if !dist.transaction_is_locked(inputs) {
        return Ok(());
    }

    let count = dist.count_locked_inputs(inputs);
    warn!("Rejecting transaction: {} of {} inputs are locked", count, inputs.len());
    Err(DistributionError::LockedInputs { count })
}
