//! Transaction input types as seen by the lock check.
//!
//! The ledger owns the real unspent-output model. All the lock check needs from
//! an input is the address that owns it, encoded exactly like the literals in
//! the distribution table.

use serde::{Deserialize, Serialize};

/// Anything that can report the address spending it.
pub trait SpendingAddress {
    fn spending_address(&self) -> &str;
}

impl SpendingAddress for str {
    fn spending_address(&self) -> &str {
        self
    }
}

impl SpendingAddress for String {
    fn spending_address(&self) -> &str {
        self.as_str()
    }
}

impl<T: SpendingAddress + ?Sized> SpendingAddress for &T {
    fn spending_address(&self) -> &str {
        (**self).spending_address()
    }
}

/// A minimal unspent output: owning address, coins and coin hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxOut {
    pub address: String,
    pub coins: u64,
    #[serde(default)]
    pub hours: u64,
}

impl UxOut {
    pub fn new(address: impl Into<String>, coins: u64) -> Self {
        Self {
            address: address.into(),
            coins,
            hours: 0,
        }
    }

    pub fn with_hours(mut self, hours: u64) -> Self {
        self.hours = hours;
        self
    }
}

impl SpendingAddress for UxOut {
    fn spending_address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uxout_reports_its_address() {
        let ux = UxOut::new("2HPQhxEXfrCT9satjjUdQWDHk7J64Q2htQ", 1_000_000).with_hours(7);
        assert_eq!(ux.spending_address(), "2HPQhxEXfrCT9satjjUdQWDHk7J64Q2htQ");
        assert_eq!(ux.hours, 7);
    }

    #[test]
    fn test_uxout_hours_default_when_missing() {
        let json = r#"{"address":"abc","coins":5}"#;
        let ux: UxOut = serde_json::from_str(json).unwrap();
        assert_eq!(ux, UxOut::new("abc", 5));
    }

    #[test]
    fn test_reference_forwards_address() {
        let owned = String::from("xyz");
        let borrowed: &String = &owned;
        assert_eq!(borrowed.spending_address(), "xyz");
        assert_eq!("xyz".spending_address(), "xyz");
    }
}
