//! # Liquidity Pool Interface
//!
//! The method-level contract of the swap counterparty. Reserves back the
//! oracle's quote; the swap entry point moves native currency in and
//! stable asset out in one atomic step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::{Address, LedgerError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by pool operations.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The pool's reentrancy lock is held — a swap is already executing.
    #[error("pool is locked: a swap is already in progress")]
    Locked,

    /// One or both reserves are zero; the pool cannot price a trade.
    #[error("pool has empty reserves (native {native}, stable {stable})")]
    EmptyReserves {
        /// Native-side reserve at the time of the attempt.
        native: u128,
        /// Stable-side reserve at the time of the attempt.
        stable: u128,
    },

    /// The computed output floored to zero — the input was dust.
    #[error("swap output rounded to zero for input {amount_in}")]
    DustOutput {
        /// The offending input amount.
        amount_in: u128,
    },

    /// The computed output fell below the requested minimum.
    #[error("output {amount_out} below requested minimum {min_out}")]
    BelowMinimumOut {
        /// What the curve produced.
        amount_out: u128,
        /// The floor the caller demanded.
        min_out: u128,
    },

    /// Intermediate arithmetic overflowed.
    #[error("pool arithmetic overflow")]
    Overflow,

    /// A ledger movement failed (caller short of native currency, etc.).
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

// ---------------------------------------------------------------------------
// Reserves
// ---------------------------------------------------------------------------

/// A snapshot of the pool's two reserves, sampled at call time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolReserves {
    /// Native-currency units held by the pool.
    pub native: u128,
    /// Stable-asset units held by the pool.
    pub stable: u128,
}

// ---------------------------------------------------------------------------
// LiquidityPool
// ---------------------------------------------------------------------------

/// The swap counterparty and price source.
///
/// Implementations must make `swap_native_for_stable` atomic: on any
/// failure, no balance on either side may have moved.
pub trait LiquidityPool: Send + Sync {
    /// Current reserves. Read-only; may differ between calls as swaps
    /// shift the pool.
    fn reserves(&self) -> PoolReserves;

    /// Swaps `amount_in` native currency from `caller` for the maximal
    /// stable-asset output along the pool's current curve, crediting the
    /// output to `caller` on the stable ledger.
    ///
    /// `min_out` is the caller's output floor; the pool rejects the trade
    /// with [`PoolError::BelowMinimumOut`] if the curve produces less.
    ///
    /// Returns the stable amount credited.
    fn swap_native_for_stable(
        &self,
        caller: &Address,
        amount_in: u128,
        min_out: u128,
    ) -> Result<u128, PoolError>;
}
