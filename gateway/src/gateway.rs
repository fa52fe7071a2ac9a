//! # Gateway Facade
//!
//! Single entry surface over the oracle, swap engine, and vault. The
//! facade owns one reentrancy guard shared by every state-mutating
//! operation, so a swap can never be re-entered through a vault exit or
//! vice versa. `quote_price` is read-only and deliberately unguarded.

use std::sync::Arc;

use crate::amm::LiquidityPool;
use crate::error::GatewayError;
use crate::events::EventLog;
use crate::guard::ReentrancyGuard;
use crate::ledger::{Address, FungibleLedger};
use crate::oracle::{ExchangeRate, PriceOracle};
use crate::swap::SwapEngine;
use crate::vault::{Position, VaultGateway};

/// The assembled gateway: oracle + swap engine + vault behind one guard.
///
/// All handles are injected — the facade owns no ledgers itself, which
/// keeps it testable against whatever ledger fixtures a caller wires up.
pub struct StableGateway {
    oracle: PriceOracle,
    swap: SwapEngine,
    vault: VaultGateway,
    events: Arc<EventLog>,
    guard: ReentrancyGuard,
}

impl StableGateway {
    /// Assembles a gateway over a liquidity pool, a stable-asset ledger,
    /// and a share ledger whose supply authority is `vault_address`.
    pub fn new(
        pool: Arc<dyn LiquidityPool>,
        stable: Arc<dyn FungibleLedger>,
        shares: Arc<dyn FungibleLedger>,
        vault_address: Address,
    ) -> Self {
        let events = Arc::new(EventLog::new());
        Self {
            oracle: PriceOracle::new(Arc::clone(&pool)),
            swap: SwapEngine::new(pool, Arc::clone(&events)),
            vault: VaultGateway::new(vault_address, stable, shares, Arc::clone(&events)),
            events,
            guard: ReentrancyGuard::new(),
        }
    }

    /// Current native→stable exchange rate from the pool reserves.
    ///
    /// Read-only: runs outside the guard so quoting stays available even
    /// while a mutation is in flight on another thread.
    pub fn quote_price(&self) -> Result<ExchangeRate, GatewayError> {
        Ok(self.oracle.quote_price()?)
    }

    /// Swaps `amount_in` of the caller's native asset for stable asset.
    pub fn swap_native_for_stable(
        &self,
        caller: &Address,
        amount_in: u128,
    ) -> Result<u128, GatewayError> {
        let _hold = self.guard.enter()?;
        Ok(self.swap.swap_native_for_stable(caller, amount_in)?)
    }

    /// Deposits stable asset into the vault, minting shares.
    pub fn enter(&self, caller: &Address, stable_amount: u128) -> Result<u128, GatewayError> {
        let _hold = self.guard.enter()?;
        Ok(self.vault.enter(caller, stable_amount)?)
    }

    /// Redeems vault shares for stable asset.
    pub fn exit(&self, caller: &Address, share_amount: u128) -> Result<u128, GatewayError> {
        let _hold = self.guard.enter()?;
        Ok(self.vault.exit(caller, share_amount)?)
    }

    /// The vault's account address — the spender to approve for deposits
    /// and redemptions.
    pub fn vault_address(&self) -> &Address {
        self.vault.address()
    }

    /// The account's vault position.
    pub fn position_of(&self, account: &Address) -> Position {
        self.vault.position_of(account)
    }

    /// The vault's pooled stable holdings.
    pub fn vault_holdings(&self) -> u128 {
        self.vault.holdings()
    }

    /// Outstanding vault share supply.
    pub fn total_shares(&self) -> u128 {
        self.vault.total_shares()
    }

    /// The append-only log of settled gateway operations.
    pub fn events(&self) -> &EventLog {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amm::ConstantProductPool;
    use crate::asset::{stable_asset, vault_share_asset};
    use crate::config::WAD;
    use crate::ledger::{InMemoryLedger, NativeLedger};

    struct Fixture {
        native: Arc<NativeLedger>,
        stable: Arc<InMemoryLedger>,
        shares: Arc<InMemoryLedger>,
        gateway: StableGateway,
        issuer: Address,
    }

    /// Pool seeded at 2000 stable per native; alice funded with native.
    fn fixture() -> Fixture {
        let issuer = Address::new("aurum:issuer");
        let pool_addr = Address::new("aurum:pool");
        let vault_addr = Address::new("aurum:vault");

        let native = Arc::new(NativeLedger::new());
        let stable = Arc::new(InMemoryLedger::new(stable_asset(), issuer.clone()));
        let shares = Arc::new(InMemoryLedger::new(
            vault_share_asset(vault_addr.as_str()),
            vault_addr.clone(),
        ));

        native.credit(&pool_addr, 100 * WAD).unwrap();
        stable
            .mint(&issuer, &pool_addr, 200_000 * WAD)
            .unwrap();
        native.credit(&alice(), 10 * WAD).unwrap();

        let pool = Arc::new(ConstantProductPool::new(
            pool_addr,
            Arc::clone(&native),
            Arc::clone(&stable) as Arc<dyn FungibleLedger>,
        ));

        let gateway = StableGateway::new(
            pool,
            Arc::clone(&stable) as Arc<dyn FungibleLedger>,
            Arc::clone(&shares) as Arc<dyn FungibleLedger>,
            vault_addr,
        );

        Fixture {
            native,
            stable,
            shares,
            gateway,
            issuer,
        }
    }

    fn alice() -> Address {
        Address::new("aurum:alice")
    }

    #[test]
    fn quote_reflects_pool_reserves() {
        let fx = fixture();
        let rate = fx.gateway.quote_price().unwrap();
        assert_eq!(rate.whole_units(), 2_000);
    }

    #[test]
    fn swap_then_enter_then_exit_journey() {
        let fx = fixture();
        let a = alice();

        let stable_out = fx.gateway.swap_native_for_stable(&a, 5 * WAD).unwrap();
        assert_eq!(fx.native.balance_of(&a), 5 * WAD);
        assert_eq!(fx.stable.balance_of(&a), stable_out);

        fx.stable.approve(&a, fx.gateway.vault_address(), stable_out);
        let shares = fx.gateway.enter(&a, stable_out).unwrap();
        // Bootstrap deposit mints one-to-one.
        assert_eq!(shares, stable_out);
        assert_eq!(fx.gateway.position_of(&a), Position::HasShares(shares));

        fx.shares.approve(&a, fx.gateway.vault_address(), shares);
        let back = fx.gateway.exit(&a, shares).unwrap();
        assert_eq!(back, stable_out);
        assert_eq!(fx.gateway.position_of(&a), Position::NoPosition);
        assert_eq!(fx.gateway.events().len(), 3);
    }

    #[test]
    fn guard_releases_between_sequential_calls() {
        let fx = fixture();
        let a = alice();
        fx.gateway.swap_native_for_stable(&a, WAD).unwrap();
        fx.gateway.swap_native_for_stable(&a, WAD).unwrap();
        assert_eq!(fx.gateway.events().len(), 2);
    }

    #[test]
    fn errors_surface_through_unified_type() {
        let fx = fixture();
        let result = fx.gateway.enter(&alice(), 0);
        assert!(matches!(
            result,
            Err(GatewayError::Vault(crate::vault::VaultError::ZeroDeposit))
        ));
    }

    #[test]
    fn vault_accounting_visible_through_facade() {
        let fx = fixture();
        let a = alice();
        fx.stable.mint(&fx.issuer, &a, 1_000).unwrap();
        fx.stable.approve(&a, fx.gateway.vault_address(), 1_000);
        fx.gateway.enter(&a, 1_000).unwrap();
        assert_eq!(fx.gateway.vault_holdings(), 1_000);
        assert_eq!(fx.gateway.total_shares(), 1_000);
    }
}
