//! # Vault Gateway
//!
//! Share-based entry and exit for a yield-bearing stable-asset vault.
//! Depositors pull stable asset in through the allowance flow and receive
//! shares — a transferable pro-rata claim on the vault's holdings.
//! Redeemers burn shares and take stable asset out at the current share
//! price.
//!
//! Yield generation itself is opaque here: whatever strategy grows the
//! vault's stable balance simply raises the share price. The gateway only
//! keeps the share accounting honest:
//!
//! - Mint: `deposit * supply / holdings`, with holdings sampled **before**
//!   the deposit lands — sampling after dilutes the depositor.
//! - Redeem: `shares * holdings / supply`.
//! - Both divisions floor, in the vault's favor, so cumulative rounding
//!   strands dust in the vault rather than letting claims outgrow
//!   holdings.

use std::sync::Arc;
use thiserror::Error;

use crate::events::{EventLog, GatewayEvent};
use crate::ledger::{Address, FungibleLedger, LedgerError};
use crate::math;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// `enter` called with a zero amount.
    #[error("zero deposit: enter amount must be positive")]
    ZeroDeposit,

    /// `exit` called with a zero share amount.
    #[error("zero redemption: exit amount must be positive")]
    ZeroRedemption,

    /// The caller holds fewer shares than they tried to redeem.
    #[error("insufficient shares: available {available}, requested {requested}")]
    InsufficientShares {
        /// The caller's share balance.
        available: u128,
        /// The share amount requested.
        requested: u128,
    },

    /// The deposit is too small to mint a single share at the current
    /// share price; accepting it would confiscate the deposit.
    #[error("deposit of {stable_in} floors to zero shares at the current share price")]
    DustDeposit {
        /// The offending deposit amount.
        stable_in: u128,
    },

    /// Shares exist but holdings are zero — the share price is undefined
    /// and deposits must not be accepted until accounting is restored.
    #[error("share price undefined: {supply} shares outstanding against zero holdings")]
    SharePriceUndefined {
        /// Outstanding share supply.
        supply: u128,
    },

    /// Intermediate arithmetic overflowed.
    #[error("vault arithmetic overflow")]
    Overflow,

    /// A ledger movement failed (allowance exceeded, balance short).
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// An account's standing with the vault. The only transitions are
/// `NoPosition -> HasShares` via enter and `HasShares -> HasShares |
/// NoPosition` via partial/full exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// No shares held.
    NoPosition,
    /// Shares held; the claim is `shares * holdings / supply`.
    HasShares(u128),
}

// ---------------------------------------------------------------------------
// VaultGateway
// ---------------------------------------------------------------------------

/// Entry/exit coordinator over injected stable and share ledgers.
///
/// The vault's own `address` is its account on the stable ledger (where
/// pooled holdings live), the spender identity callers approve, and the
/// mint/burn authority on the share ledger.
pub struct VaultGateway {
    address: Address,
    stable: Arc<dyn FungibleLedger>,
    shares: Arc<dyn FungibleLedger>,
    events: Arc<EventLog>,
}

impl VaultGateway {
    /// Creates a vault gateway. `shares` must have `address` as its
    /// supply authority or every mint will fail.
    pub fn new(
        address: Address,
        stable: Arc<dyn FungibleLedger>,
        shares: Arc<dyn FungibleLedger>,
        events: Arc<EventLog>,
    ) -> Self {
        Self {
            address,
            stable,
            shares,
            events,
        }
    }

    /// The vault's account address — the spender callers must approve.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The vault's pooled stable-asset holdings.
    pub fn holdings(&self) -> u128 {
        self.stable.balance_of(&self.address)
    }

    /// Total outstanding share supply.
    pub fn total_shares(&self) -> u128 {
        self.shares.total_supply()
    }

    /// The account's current position.
    pub fn position_of(&self, account: &Address) -> Position {
        match self.shares.balance_of(account) {
            0 => Position::NoPosition,
            held => Position::HasShares(held),
        }
    }

    /// Deposits `stable_amount` of the caller's stable asset and mints
    /// shares at the pre-deposit share price.
    ///
    /// Precondition: the caller has approved this vault's address for at
    /// least `stable_amount` on the stable ledger.
    ///
    /// Atomic: the pull is the only fallible external step, and nothing
    /// is minted until it has succeeded; on failure no balance moves.
    ///
    /// # Errors
    ///
    /// [`VaultError::ZeroDeposit`] for a zero amount; allowance and
    /// balance shortfalls propagate as [`VaultError::Ledger`].
    pub fn enter(&self, caller: &Address, stable_amount: u128) -> Result<u128, VaultError> {
        if stable_amount == 0 {
            return Err(VaultError::ZeroDeposit);
        }

        // Share price inputs sampled before the deposit lands.
        let supply = self.shares.total_supply();
        let holdings = self.holdings();

        if supply > 0 && holdings == 0 {
            return Err(VaultError::SharePriceUndefined { supply });
        }
        let shares_out = math::shares_for_deposit(supply, holdings, stable_amount)
            .ok_or(VaultError::Overflow)?;
        if shares_out == 0 {
            return Err(VaultError::DustDeposit {
                stable_in: stable_amount,
            });
        }
        // Pre-check the mint so it cannot fail after the pull.
        supply
            .checked_add(shares_out)
            .ok_or(VaultError::Overflow)?;

        // Pull the deposit: consumes the caller's allowance and fails
        // whole on any shortfall.
        self.stable
            .transfer_from(caller, &self.address, &self.address, stable_amount)?;

        if let Err(err) = self.shares.mint(&self.address, caller, shares_out) {
            // Unreachable — authority and overflow were checked above —
            // but if the ledger refuses, return the deposit whole.
            let _ = self.stable.transfer(&self.address, caller, stable_amount);
            return Err(VaultError::Ledger(err));
        }

        self.events.record(GatewayEvent::Entered {
            caller: caller.clone(),
            stable_in: stable_amount,
            shares_out,
        });
        tracing::info!(
            caller = %caller,
            stable_in = stable_amount,
            shares_out,
            holdings = holdings + stable_amount,
            "vault entered"
        );

        Ok(shares_out)
    }

    /// Burns `share_amount` of the caller's shares and pays out stable
    /// asset at the current share price.
    ///
    /// Precondition: the caller has approved this vault's address for at
    /// least `share_amount` on the share ledger (shares are a
    /// transferable ledger, so redemption consumes an allowance like any
    /// other pull).
    ///
    /// Shares are debited before any stable asset leaves the vault, so a
    /// reentrant observer can never see payout without the burn.
    ///
    /// # Errors
    ///
    /// [`VaultError::ZeroRedemption`] for a zero amount;
    /// [`VaultError::InsufficientShares`] when the balance is short;
    /// share-allowance shortfalls propagate as [`VaultError::Ledger`].
    pub fn exit(&self, caller: &Address, share_amount: u128) -> Result<u128, VaultError> {
        if share_amount == 0 {
            return Err(VaultError::ZeroRedemption);
        }

        let available = self.shares.balance_of(caller);
        if available < share_amount {
            return Err(VaultError::InsufficientShares {
                available,
                requested: share_amount,
            });
        }

        let supply = self.shares.total_supply();
        let holdings = self.holdings();
        // supply >= available > 0 here, so the division is defined.
        let payout = math::payout_for_shares(supply, holdings, share_amount)
            .ok_or(VaultError::Overflow)?;

        // Pull the shares through the allowance, then retire them.
        self.shares
            .transfer_from(caller, &self.address, &self.address, share_amount)?;
        if let Err(err) = self.shares.burn(&self.address, &self.address, share_amount) {
            let _ = self.shares.transfer(&self.address, caller, share_amount);
            return Err(VaultError::Ledger(err));
        }

        if let Err(err) = self.stable.transfer(&self.address, caller, payout) {
            // Unreachable — payout <= holdings by construction — but if
            // the ledger refuses, restore the caller's shares.
            let _ = self.shares.mint(&self.address, caller, share_amount);
            return Err(VaultError::Ledger(err));
        }

        self.events.record(GatewayEvent::Exited {
            caller: caller.clone(),
            shares_in: share_amount,
            stable_out: payout,
        });
        tracing::info!(
            caller = %caller,
            shares_in = share_amount,
            stable_out = payout,
            holdings = holdings - payout,
            "vault exited"
        );

        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{stable_asset, vault_share_asset};
    use crate::ledger::InMemoryLedger;

    struct Fixture {
        stable: Arc<InMemoryLedger>,
        shares: Arc<InMemoryLedger>,
        vault: VaultGateway,
        issuer: Address,
    }

    fn fixture() -> Fixture {
        let issuer = Address::new("aurum:issuer");
        let vault_addr = Address::new("aurum:vault");
        let stable = Arc::new(InMemoryLedger::new(stable_asset(), issuer.clone()));
        let shares = Arc::new(InMemoryLedger::new(
            vault_share_asset(vault_addr.as_str()),
            vault_addr.clone(),
        ));
        let vault = VaultGateway::new(
            vault_addr,
            Arc::clone(&stable) as Arc<dyn FungibleLedger>,
            Arc::clone(&shares) as Arc<dyn FungibleLedger>,
            Arc::new(EventLog::new()),
        );
        Fixture {
            stable,
            shares,
            vault,
            issuer,
        }
    }

    fn alice() -> Address {
        Address::new("aurum:alice")
    }

    fn bob() -> Address {
        Address::new("aurum:bob")
    }

    fn fund(fx: &Fixture, who: &Address, amount: u128) {
        fx.stable.mint(&fx.issuer, who, amount).unwrap();
    }

    #[test]
    fn bootstrap_deposit_mints_one_to_one() {
        let fx = fixture();
        fund(&fx, &alice(), 5_000);
        fx.stable.approve(&alice(), fx.vault.address(), 1_000);

        let shares = fx.vault.enter(&alice(), 1_000).unwrap();

        assert_eq!(shares, 1_000);
        assert_eq!(fx.stable.balance_of(&alice()), 4_000);
        assert_eq!(fx.stable.allowance(&alice(), fx.vault.address()), 0);
        assert_eq!(fx.shares.balance_of(&alice()), 1_000);
        assert_eq!(fx.vault.holdings(), 1_000);
        assert_eq!(fx.vault.total_shares(), 1_000);
    }

    #[test]
    fn second_depositor_gets_pro_rata_shares() {
        let fx = fixture();
        fund(&fx, &alice(), 5_000);
        fund(&fx, &bob(), 500);

        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.enter(&alice(), 1_000).unwrap();

        fx.stable.approve(&bob(), fx.vault.address(), 500);
        let bob_shares = fx.vault.enter(&bob(), 500).unwrap();

        // 500 * 1000 / 1000 = 500.
        assert_eq!(bob_shares, 500);
        assert_eq!(fx.vault.holdings(), 1_500);
        assert_eq!(fx.vault.total_shares(), 1_500);
    }

    #[test]
    fn first_depositor_exit_unchanged_without_yield() {
        let fx = fixture();
        fund(&fx, &alice(), 5_000);
        fund(&fx, &bob(), 500);

        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.enter(&alice(), 1_000).unwrap();
        fx.stable.approve(&bob(), fx.vault.address(), 500);
        fx.vault.enter(&bob(), 500).unwrap();

        fx.shares.approve(&alice(), fx.vault.address(), 1_000);
        let payout = fx.vault.exit(&alice(), 1_000).unwrap();

        // 1000 * 1500 / 1500 = 1000 — no yield, no change.
        assert_eq!(payout, 1_000);
        assert_eq!(fx.stable.balance_of(&alice()), 5_000);
        assert_eq!(fx.vault.position_of(&alice()), Position::NoPosition);
    }

    #[test]
    fn yield_raises_share_price_for_later_depositors() {
        let fx = fixture();
        fund(&fx, &alice(), 1_000);
        fund(&fx, &bob(), 1_000);

        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.enter(&alice(), 1_000).unwrap();

        // Strategy yield: holdings double without new shares.
        fx.stable.mint(&fx.issuer, fx.vault.address(), 1_000).unwrap();

        fx.stable.approve(&bob(), fx.vault.address(), 1_000);
        let bob_shares = fx.vault.enter(&bob(), 1_000).unwrap();
        // 1000 * 1000 / 2000 = 500 — bob pays the doubled share price.
        assert_eq!(bob_shares, 500);

        // Alice's claim grew with the yield: 1000 * 3000 / 1500 = 2000.
        fx.shares.approve(&alice(), fx.vault.address(), 1_000);
        assert_eq!(fx.vault.exit(&alice(), 1_000).unwrap(), 2_000);
    }

    #[test]
    fn partial_exit_keeps_position() {
        let fx = fixture();
        fund(&fx, &alice(), 1_000);
        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.enter(&alice(), 1_000).unwrap();

        fx.shares.approve(&alice(), fx.vault.address(), 400);
        fx.vault.exit(&alice(), 400).unwrap();

        assert_eq!(fx.vault.position_of(&alice()), Position::HasShares(600));
        assert_eq!(fx.vault.holdings(), 600);
    }

    #[test]
    fn zero_deposit_rejected_without_state_change() {
        let fx = fixture();
        fund(&fx, &alice(), 1_000);

        let result = fx.vault.enter(&alice(), 0);
        assert!(matches!(result, Err(VaultError::ZeroDeposit)));
        assert_eq!(fx.stable.balance_of(&alice()), 1_000);
        assert_eq!(fx.vault.total_shares(), 0);
    }

    #[test]
    fn zero_redemption_rejected() {
        let fx = fixture();
        let result = fx.vault.exit(&alice(), 0);
        assert!(matches!(result, Err(VaultError::ZeroRedemption)));
    }

    #[test]
    fn exit_beyond_balance_rejected_untouched() {
        let fx = fixture();
        fund(&fx, &alice(), 1_000);
        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.enter(&alice(), 1_000).unwrap();

        fx.shares.approve(&alice(), fx.vault.address(), 2_000);
        let result = fx.vault.exit(&alice(), 1_500);
        assert!(matches!(
            result,
            Err(VaultError::InsufficientShares {
                available: 1_000,
                requested: 1_500,
            })
        ));
        assert_eq!(fx.shares.balance_of(&alice()), 1_000);
        assert_eq!(fx.vault.holdings(), 1_000);
    }

    #[test]
    fn enter_without_allowance_propagates() {
        let fx = fixture();
        fund(&fx, &alice(), 5_000);

        let result = fx.vault.enter(&alice(), 1_000);
        assert!(matches!(
            result,
            Err(VaultError::Ledger(LedgerError::AllowanceExceeded { .. }))
        ));
        assert_eq!(fx.stable.balance_of(&alice()), 5_000);
    }

    #[test]
    fn enter_beyond_balance_propagates() {
        let fx = fixture();
        fund(&fx, &alice(), 100);
        fx.stable.approve(&alice(), fx.vault.address(), 1_000);

        let result = fx.vault.enter(&alice(), 500);
        assert!(matches!(
            result,
            Err(VaultError::Ledger(LedgerError::InsufficientBalance { .. }))
        ));
        // Allowance untouched on a failed pull.
        assert_eq!(fx.stable.allowance(&alice(), fx.vault.address()), 1_000);
    }

    #[test]
    fn exit_requires_share_allowance() {
        let fx = fixture();
        fund(&fx, &alice(), 1_000);
        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.enter(&alice(), 1_000).unwrap();

        // No share approval granted.
        let result = fx.vault.exit(&alice(), 500);
        assert!(matches!(
            result,
            Err(VaultError::Ledger(LedgerError::AllowanceExceeded { .. }))
        ));
        assert_eq!(fx.shares.balance_of(&alice()), 1_000);
    }

    #[test]
    fn round_trip_never_profits() {
        let fx = fixture();
        fund(&fx, &alice(), 1_000);
        fund(&fx, &bob(), 777);

        // Bob enters first with an awkward amount to desync share price.
        fx.stable.approve(&bob(), fx.vault.address(), 777);
        fx.vault.enter(&bob(), 777).unwrap();
        fx.stable.mint(&fx.issuer, fx.vault.address(), 333).unwrap();

        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        let shares = fx.vault.enter(&alice(), 1_000).unwrap();
        fx.shares.approve(&alice(), fx.vault.address(), shares);
        let back = fx.vault.exit(&alice(), shares).unwrap();

        assert!(back <= 1_000);
    }

    #[test]
    fn dust_deposit_rejected_rather_than_confiscated() {
        let fx = fixture();
        fund(&fx, &alice(), 10);
        fx.stable.approve(&alice(), fx.vault.address(), 10);
        fx.vault.enter(&alice(), 10).unwrap();

        // Yield makes one share worth far more than bob's deposit.
        fx.stable.mint(&fx.issuer, fx.vault.address(), 1_000_000).unwrap();

        fund(&fx, &bob(), 5);
        fx.stable.approve(&bob(), fx.vault.address(), 5);
        let result = fx.vault.enter(&bob(), 5);
        assert!(matches!(result, Err(VaultError::DustDeposit { .. })));
        assert_eq!(fx.stable.balance_of(&bob()), 5);
    }

    #[test]
    fn events_recorded_for_enter_and_exit() {
        let fx = fixture();
        fund(&fx, &alice(), 1_000);
        fx.stable.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.enter(&alice(), 1_000).unwrap();
        fx.shares.approve(&alice(), fx.vault.address(), 1_000);
        fx.vault.exit(&alice(), 1_000).unwrap();

        let all = fx.vault.events.all();
        assert_eq!(all.len(), 2);
        assert!(matches!(all[0].event, GatewayEvent::Entered { .. }));
        assert!(matches!(all[1].event, GatewayEvent::Exited { .. }));
    }
}
