//! # Ledger Module — Fungible Balances & Allowances
//!
//! The gateway never owns balance state. Every amount it moves lives in
//! an external fungible-balance ledger, reached through the narrow
//! interfaces in this module:
//!
//! ```text
//! fungible.rs — FungibleLedger trait: balances, allowances, mint/burn
//! memory.rs   — InMemoryLedger: the reference implementation
//! native.rs   — NativeLedger: the allowance-free base currency
//! ```
//!
//! ## Design Principles
//!
//! 1. **All amounts are `u128` in smallest-unit denomination.** No
//!    floating point, no decimals in arithmetic — the `decimals` field on
//!    [`AssetInfo`](crate::asset::AssetInfo) is display-only.
//!
//! 2. **Approve overwrites.** An allowance is a plain (owner, spender,
//!    amount) triple; `approve` replaces it, never accumulates, and
//!    `transfer_from` consumes it down to zero.
//!
//! 3. **Paired effects are atomic.** Decrementing an allowance and moving
//!    the balance happen under one lock — an observer never sees one
//!    without the other.

pub mod fungible;
pub mod memory;
pub mod native;

pub use fungible::{FungibleLedger, LedgerError};
pub use memory::InMemoryLedger;
pub use native::NativeLedger;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// An account address on the host ledger, formatted `aurum:<hex>`.
///
/// The gateway treats addresses as opaque identifiers; it never derives
/// keys from them or validates the hex payload.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Wraps an address string.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_roundtrip() {
        let addr = Address::new("aurum:abc123");
        assert_eq!(addr.as_str(), "aurum:abc123");
        assert_eq!(addr.to_string(), "aurum:abc123");
    }

    #[test]
    fn address_equality_and_hashing() {
        use std::collections::HashMap;
        let a = Address::new("aurum:a");
        let b = Address::from("aurum:a");
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 1u128);
        assert_eq!(map.get(&b), Some(&1));
    }

    #[test]
    fn address_serialization() {
        let addr = Address::new("aurum:abc");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"aurum:abc\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
