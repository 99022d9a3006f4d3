//! Error types for premine-lock

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("MaxCoinSupply ({supply}) should be perfectly divisible by DistributionAddressesTotal ({total})")]
    IndivisibleSupply { supply: u64, total: u64 },
    #[error("InitialUnlockedCount ({unlocked}) exceeds DistributionAddressesTotal ({total})")]
    UnlockedCountOutOfRange { unlocked: u64, total: u64 },
    #[error("Distribution table has {actual} addresses, expected {expected}")]
    TableLength { expected: u64, actual: usize },
    #[error("Transaction has locked address inputs ({count} locked)")]
    LockedInputs { count: usize },
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for DistributionError {
    fn from(err: toml::de::Error) -> Self {
        DistributionError::Config(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, DistributionError>;
