//! # Native-Currency Ledger
//!
//! The base currency of the host ledger has no allowance machinery — a
//! caller spends it by attaching value to a call, so the only operations
//! are credit, debit, and balance queries. The swap engine debits the
//! caller here and the pool's native reserve is simply its balance on
//! this ledger.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::fungible::LedgerError;
use super::Address;

/// An allowance-free balance ledger for the native currency.
pub struct NativeLedger {
    balances: RwLock<HashMap<Address, u128>>,
}

impl NativeLedger {
    /// Creates an empty native ledger.
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// The account's native balance, zero if no entry exists.
    pub fn balance_of(&self, account: &Address) -> u128 {
        self.balances.read().get(account).copied().unwrap_or(0)
    }

    /// Credits `amount` to `account`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`] if the balance would exceed `u128::MAX`.
    pub fn credit(&self, account: &Address, amount: u128) -> Result<u128, LedgerError> {
        let mut balances = self.balances.write();
        let current = balances.get(account).copied().unwrap_or(0);
        let updated = current.checked_add(amount).ok_or(LedgerError::Overflow {
            current,
            credit: amount,
        })?;
        balances.insert(account.clone(), updated);
        Ok(updated)
    }

    /// Debits `amount` from `account`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if the balance is short.
    pub fn debit(&self, account: &Address, amount: u128) -> Result<u128, LedgerError> {
        let mut balances = self.balances.write();
        let current = balances.get(account).copied().unwrap_or(0);
        if current < amount {
            return Err(LedgerError::InsufficientBalance {
                available: current,
                requested: amount,
            });
        }
        let updated = current - amount;
        balances.insert(account.clone(), updated);
        Ok(updated)
    }

    /// Moves `amount` from `from` to `to` as one atomic effect.
    pub fn transfer(&self, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
        let mut balances = self.balances.write();
        let from_balance = balances.get(from).copied().unwrap_or(0);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                available: from_balance,
                requested: amount,
            });
        }
        // Debit first so a self-transfer reads its own updated balance.
        balances.insert(from.clone(), from_balance - amount);
        let to_balance = balances.get(to).copied().unwrap_or(0);
        match to_balance.checked_add(amount) {
            Some(updated) => {
                balances.insert(to.clone(), updated);
                Ok(())
            }
            None => {
                balances.insert(from.clone(), from_balance);
                Err(LedgerError::Overflow {
                    current: to_balance,
                    credit: amount,
                })
            }
        }
    }
}

impl Default for NativeLedger {
    fn default() -> Self {
        Self::new()
    }
}
