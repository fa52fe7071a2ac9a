//! # In-Memory Fungible Ledger
//!
//! The reference [`FungibleLedger`] implementation. Balance and allowance
//! maps live behind a single `parking_lot::RwLock` so that the paired
//! effects of `transfer_from` — allowance decrement and balance move —
//! are atomic with each other, exactly as the trait contract demands.
//!
//! In production the stable-asset and share ledgers are contracts on the
//! host chain; this implementation stands in for them in tests and in the
//! local simulation.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::fungible::{FungibleLedger, LedgerError};
use super::Address;
use crate::asset::AssetInfo;

/// Interior state guarded by one lock — cross-map updates must be atomic.
#[derive(Default)]
struct LedgerState {
    balances: HashMap<Address, u128>,
    allowances: HashMap<(Address, Address), u128>,
    total_supply: u128,
}

/// An in-memory fungible ledger with a designated supply authority.
pub struct InMemoryLedger {
    asset: AssetInfo,
    authority: Address,
    state: RwLock<LedgerState>,
}

impl InMemoryLedger {
    /// Creates an empty ledger for `asset` whose mint/burn authority is
    /// `authority`.
    pub fn new(asset: AssetInfo, authority: Address) -> Self {
        Self {
            asset,
            authority,
            state: RwLock::new(LedgerState::default()),
        }
    }

    /// The address allowed to mint and burn on this ledger.
    pub fn authority(&self) -> &Address {
        &self.authority
    }

    fn check_authority(&self, caller: &Address) -> Result<(), LedgerError> {
        if caller != &self.authority {
            return Err(LedgerError::NotAuthority {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    /// Debits `from` and credits `to` within an already-held lock.
    ///
    /// Validates the debit before touching anything, so a failure leaves
    /// the state untouched. The credit cannot overflow because the total
    /// supply is conserved.
    fn move_balance(
        state: &mut LedgerState,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let from_balance = state.balances.get(from).copied().unwrap_or(0);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                available: from_balance,
                requested: amount,
            });
        }

        *state.balances.entry(from.clone()).or_insert(0) = from_balance - amount;
        let to_balance = state.balances.entry(to.clone()).or_insert(0);
        *to_balance += amount;
        Ok(())
    }
}

impl FungibleLedger for InMemoryLedger {
    fn asset(&self) -> &AssetInfo {
        &self.asset
    }

    fn balance_of(&self, account: &Address) -> u128 {
        self.state.read().balances.get(account).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> u128 {
        self.state.read().total_supply
    }

    fn approve(&self, owner: &Address, spender: &Address, amount: u128) {
        let mut state = self.state.write();
        state
            .allowances
            .insert((owner.clone(), spender.clone()), amount);
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.state
            .read()
            .allowances
            .get(&(owner.clone(), spender.clone()))
            .copied()
            .unwrap_or(0)
    }

    fn transfer(&self, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        Self::move_balance(&mut state, from, to, amount)
    }

    fn transfer_from(
        &self,
        owner: &Address,
        spender: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.write();

        let key = (owner.clone(), spender.clone());
        let allowed = state.allowances.get(&key).copied().unwrap_or(0);
        if amount > allowed {
            return Err(LedgerError::AllowanceExceeded {
                allowed,
                requested: amount,
            });
        }

        // Balance check happens before the allowance is consumed so that
        // a failed pull leaves the allowance intact.
        Self::move_balance(&mut state, owner, to, amount)?;
        state.allowances.insert(key, allowed - amount);
        Ok(())
    }

    fn mint(&self, caller: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
        self.check_authority(caller)?;
        let mut state = self.state.write();

        let new_supply =
            state
                .total_supply
                .checked_add(amount)
                .ok_or(LedgerError::Overflow {
                    current: state.total_supply,
                    credit: amount,
                })?;
        let balance = state.balances.get(to).copied().unwrap_or(0);
        let new_balance = balance.checked_add(amount).ok_or(LedgerError::Overflow {
            current: balance,
            credit: amount,
        })?;

        state.total_supply = new_supply;
        state.balances.insert(to.clone(), new_balance);
        Ok(())
    }

    fn burn(&self, caller: &Address, from: &Address, amount: u128) -> Result<(), LedgerError> {
        self.check_authority(caller)?;
        let mut state = self.state.write();

        let balance = state.balances.get(from).copied().unwrap_or(0);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                available: balance,
                requested: amount,
            });
        }

        state.balances.insert(from.clone(), balance - amount);
        state.total_supply -= amount;
        Ok(())
    }
}
