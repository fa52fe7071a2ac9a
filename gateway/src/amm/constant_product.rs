//! # Constant-Product Reference Pool
//!
//! An x·y=k pool with a basis-point fee taken from the input side. In
//! production the gateway trades against a pool deployed by someone else;
//! this implementation stands in for it in tests and the local
//! simulation, with the same observable behavior: price impact on every
//! trade, reserves that drift with volume, dust inputs rejected, and a
//! reentrancy lock of its own.
//!
//! Reserves are not shadow-accounted: the pool's native reserve IS its
//! balance on the native ledger, and its stable reserve IS its balance on
//! the stable ledger. Whatever the ledgers say, the curve prices.

use std::sync::Arc;

use super::pool::{LiquidityPool, PoolError, PoolReserves};
use crate::config::{BPS_DENOMINATOR, POOL_FEE_BPS};
use crate::guard::ReentrancyGuard;
use crate::ledger::{Address, FungibleLedger, NativeLedger};
use crate::math;

/// Reference constant-product pool.
pub struct ConstantProductPool {
    /// The pool's own account on both ledgers.
    address: Address,
    native: Arc<NativeLedger>,
    stable: Arc<dyn FungibleLedger>,
    /// Input-side fee in basis points.
    fee_bps: u128,
    lock: ReentrancyGuard,
}

impl ConstantProductPool {
    /// Creates a pool trading against the given ledgers with the default
    /// fee. The pool prices whatever liquidity its `address` holds; fund
    /// that account before trading.
    pub fn new(address: Address, native: Arc<NativeLedger>, stable: Arc<dyn FungibleLedger>) -> Self {
        Self::with_fee(address, native, stable, POOL_FEE_BPS)
    }

    /// Creates a pool with an explicit fee in basis points.
    pub fn with_fee(
        address: Address,
        native: Arc<NativeLedger>,
        stable: Arc<dyn FungibleLedger>,
        fee_bps: u128,
    ) -> Self {
        Self {
            address,
            native,
            stable,
            fee_bps,
            lock: ReentrancyGuard::new(),
        }
    }

    /// The pool's account address.
    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl LiquidityPool for ConstantProductPool {
    fn reserves(&self) -> PoolReserves {
        PoolReserves {
            native: self.native.balance_of(&self.address),
            stable: self.stable.balance_of(&self.address),
        }
    }

    fn swap_native_for_stable(
        &self,
        caller: &Address,
        amount_in: u128,
        min_out: u128,
    ) -> Result<u128, PoolError> {
        let _hold = self.lock.enter().map_err(|_| PoolError::Locked)?;

        let reserves = self.reserves();
        if reserves.native == 0 || reserves.stable == 0 {
            return Err(PoolError::EmptyReserves {
                native: reserves.native,
                stable: reserves.stable,
            });
        }

        let in_after_fee = math::apply_fee_bps(amount_in, self.fee_bps, BPS_DENOMINATOR)
            .ok_or(PoolError::Overflow)?;
        let amount_out = math::constant_product_out(reserves.native, reserves.stable, in_after_fee)
            .ok_or(PoolError::Overflow)?;

        if amount_out == 0 {
            return Err(PoolError::DustOutput { amount_in });
        }
        if amount_out < min_out {
            return Err(PoolError::BelowMinimumOut {
                amount_out,
                min_out,
            });
        }

        // The only step that can legitimately fail: the caller may not
        // hold `amount_in`. Nothing has moved before this point.
        self.native.transfer(caller, &self.address, amount_in)?;

        if let Err(err) = self.stable.transfer(&self.address, caller, amount_out) {
            // Unreachable in practice — the curve guarantees
            // amount_out < stable reserve — but if the ledger refuses,
            // compensate by returning the native input the pool just
            // received, restoring the pre-swap state.
            let _ = self.native.transfer(&self.address, caller, amount_in);
            return Err(PoolError::Ledger(err));
        }

        tracing::debug!(
            caller = %caller,
            amount_in,
            amount_out,
            reserve_native = reserves.native,
            reserve_stable = reserves.stable,
            "constant-product swap executed"
        );

        Ok(amount_out)
    }
}
