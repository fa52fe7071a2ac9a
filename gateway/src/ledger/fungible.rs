//! # Fungible Ledger Interface
//!
//! The method-level contract of a standard fungible-balance ledger with
//! owner-authorized transfer-on-behalf. This is the seam between the
//! gateway and the externally owned balance state it coordinates: the
//! stable-asset ledger and the vault-share ledger are both reached
//! through this trait, injected as `Arc<dyn FungibleLedger>` handles.

use thiserror::Error;

use super::Address;
use crate::asset::AssetInfo;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by fungible-ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Attempted to move more than the available balance.
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// The owner's current balance.
        available: u128,
        /// The amount that was requested.
        requested: u128,
    },

    /// A transfer-on-behalf exceeded the spender's remaining allowance.
    #[error("allowance exceeded: allowed {allowed}, requested {requested}")]
    AllowanceExceeded {
        /// Remaining allowance for (owner, spender).
        allowed: u128,
        /// The amount the spender tried to move.
        requested: u128,
    },

    /// Arithmetic overflow during a credit or mint.
    ///
    /// Hitting this means a balance or the total supply would exceed
    /// `u128::MAX`. That's either a bug or an attack.
    #[error("balance overflow: current {current}, credit {credit}")]
    Overflow {
        /// The balance before the failed credit.
        current: u128,
        /// The amount that caused the overflow.
        credit: u128,
    },

    /// Mint or burn attempted by an address other than the ledger's
    /// designated authority.
    #[error("unauthorized supply change: {caller} is not the ledger authority")]
    NotAuthority {
        /// The address that attempted the privileged operation.
        caller: Address,
    },
}

// ---------------------------------------------------------------------------
// FungibleLedger
// ---------------------------------------------------------------------------

/// A standard fungible-balance ledger.
///
/// Semantics every implementation must uphold:
///
/// - `approve` **overwrites** the (owner, spender) allowance; it is not
///   additive. Approving the same amount twice leaves the allowance at
///   that amount.
/// - `transfer_from` atomically decrements the allowance and moves the
///   balance; it fails whole if either the allowance or the balance is
///   short, leaving both untouched.
/// - `mint` and `burn` are restricted to the ledger's supply authority.
/// - A zero balance persists as an entry; accounts are never pruned.
pub trait FungibleLedger: Send + Sync {
    /// Metadata for the asset this ledger tracks.
    fn asset(&self) -> &AssetInfo;

    /// The owner's current balance, zero if no entry exists.
    fn balance_of(&self, account: &Address) -> u128;

    /// The sum of all balances.
    fn total_supply(&self) -> u128;

    /// Sets the (owner, spender) allowance to exactly `amount`,
    /// replacing any previous value.
    fn approve(&self, owner: &Address, spender: &Address, amount: u128);

    /// The remaining (owner, spender) allowance, zero if none was granted.
    fn allowance(&self, owner: &Address, spender: &Address) -> u128;

    /// Moves `amount` directly from `from` to `to` without touching
    /// allowances. Used by an account to spend its own balance.
    fn transfer(&self, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError>;

    /// Moves `amount` of `owner`'s balance to `to`, debiting the
    /// (owner, spender) allowance by the same amount.
    ///
    /// # Errors
    ///
    /// [`LedgerError::AllowanceExceeded`] when `amount` exceeds the
    /// remaining allowance; [`LedgerError::InsufficientBalance`] when it
    /// exceeds the owner's balance. Neither the allowance nor any
    /// balance changes on failure.
    fn transfer_from(
        &self,
        owner: &Address,
        spender: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), LedgerError>;

    /// Creates `amount` new units credited to `to`. Authority-gated.
    fn mint(&self, caller: &Address, to: &Address, amount: u128) -> Result<(), LedgerError>;

    /// Destroys `amount` units from `from`'s balance. Authority-gated.
    fn burn(&self, caller: &Address, from: &Address, amount: u128) -> Result<(), LedgerError>;
}
