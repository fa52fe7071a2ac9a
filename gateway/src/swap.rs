//! # Swap Engine
//!
//! Converts a caller's native currency into stable asset against the
//! pool, crediting the output straight to the caller. The gateway is a
//! pure pass-through here: it holds no balance of its own at any point
//! during a swap.
//!
//! ## Known risk: no slippage floor
//!
//! The engine passes a zero minimum-output to the pool and accepts any
//! non-zero output. This reproduces the deployed contract's observed
//! behavior and is deliberate — callers are exposed to front-running and
//! slippage between quote and execution. Anyone adapting this engine for
//! production should surface a caller-specified minimum instead of
//! widening this default.

use std::sync::Arc;
use thiserror::Error;

use crate::amm::{LiquidityPool, PoolError};
use crate::events::{EventLog, GatewayEvent};
use crate::ledger::Address;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by swap operations.
#[derive(Debug, Error)]
pub enum SwapError {
    /// The input amount was zero.
    #[error("insufficient input: swap amount must be positive")]
    InsufficientInput,

    /// The pool rejected the trade (locked, empty, dust output, or the
    /// caller lacked the native input).
    #[error("swap failed: {0}")]
    Failed(#[from] PoolError),
}

// ---------------------------------------------------------------------------
// SwapEngine
// ---------------------------------------------------------------------------

/// Executes native→stable swaps against an injected pool.
pub struct SwapEngine {
    pool: Arc<dyn LiquidityPool>,
    events: Arc<EventLog>,
}

impl SwapEngine {
    /// Creates an engine trading against `pool`, recording completed
    /// swaps in `events`.
    pub fn new(pool: Arc<dyn LiquidityPool>, events: Arc<EventLog>) -> Self {
        Self { pool, events }
    }

    /// Swaps `amount_in` of the caller's native currency for the maximal
    /// stable output the pool offers, crediting the caller.
    ///
    /// Atomic: on any failure no currency has moved on either ledger.
    /// On success the caller's native balance is down by exactly
    /// `amount_in`, their stable balance up by the returned amount, and
    /// a `Swapped` event is recorded.
    ///
    /// # Errors
    ///
    /// [`SwapError::InsufficientInput`] for a zero input;
    /// [`SwapError::Failed`] when the pool rejects the trade.
    pub fn swap_native_for_stable(
        &self,
        caller: &Address,
        amount_in: u128,
    ) -> Result<u128, SwapError> {
        if amount_in == 0 {
            return Err(SwapError::InsufficientInput);
        }

        // Zero minimum-output: any non-zero fill is accepted (see the
        // module docs for why this is reproduced, not fixed).
        let stable_out = self.pool.swap_native_for_stable(caller, amount_in, 0)?;

        self.events.record(GatewayEvent::Swapped {
            caller: caller.clone(),
            native_in: amount_in,
            stable_out,
        });
        tracing::info!(
            caller = %caller,
            native_in = amount_in,
            stable_out,
            "swap settled"
        );

        Ok(stable_out)
    }
}
