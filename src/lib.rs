//! premine-lock - premine distribution address locking for ledger validation
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Distribution
//! - [`constants`] - Supply and distribution constants, fixed at build time
//! - [`distribution`] - Address table, locked/unlocked partition, lock check
//!
//! ## Transaction Validation
//! - [`transaction`] - The input abstraction the lock check consumes
//! - [`validation`] - Soft constraint rejecting locked spends
//!
//! ## Configuration & Utilities
//! - [`config`] - CLI configuration management
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Distribution
// ============================================================================
pub mod constants;
pub mod distribution;

// ============================================================================
// Transaction Validation
// ============================================================================
pub mod transaction;
pub mod validation;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;

pub use distribution::{
    distribution_addresses, init, locked_distribution_addresses, transaction_is_locked,
    unlocked_distribution_addresses, Distribution, DistributionParams,
};
pub use error::{DistributionError, Result};
pub use transaction::{SpendingAddress, UxOut};
