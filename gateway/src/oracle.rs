//! # Price Oracle Adapter
//!
//! Reads the pool's reserves and reports the stable-per-native exchange
//! rate as a WAD-scaled integer. Nothing is cached and nothing is locked
//! in: a quote is only ever advisory, and the rate a later swap actually
//! receives may differ as the reserves move.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::amm::LiquidityPool;
use crate::config::WAD;
use crate::math;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by price queries.
#[derive(Debug, Error)]
pub enum OracleError {
    /// One or both reserves are zero; there is no price to report.
    /// A degenerate rate (zero or infinite) must never leak out.
    #[error("oracle unavailable: pool reserves are (native {native}, stable {stable})")]
    Unavailable {
        /// Native reserve at sample time.
        native: u128,
        /// Stable reserve at sample time.
        stable: u128,
    },

    /// The WAD-scaled ratio overflowed `u128`.
    #[error("oracle arithmetic overflow while scaling the rate")]
    Overflow,
}

// ---------------------------------------------------------------------------
// ExchangeRate
// ---------------------------------------------------------------------------

/// A sampled exchange rate: stable-asset units per one native unit,
/// scaled by [`WAD`]. Always strictly positive — a zero rate is reported
/// as [`OracleError::Unavailable`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    rate_wad: u128,
}

impl ExchangeRate {
    /// Wraps an already WAD-scaled rate.
    pub fn from_wad(rate_wad: u128) -> Self {
        Self { rate_wad }
    }

    /// The raw WAD-scaled rate.
    pub fn as_wad(&self) -> u128 {
        self.rate_wad
    }

    /// The stable output this rate implies for `native_in`, ignoring
    /// fees and price impact. Advisory only; used by monitoring to sanity-
    /// check realized swap outputs.
    pub fn implied_stable_out(&self, native_in: u128) -> Option<u128> {
        math::mul_div_floor(native_in, self.rate_wad, WAD)
    }

    /// Whole stable units per native unit, truncated. Display helper.
    pub fn whole_units(&self) -> u128 {
        self.rate_wad / WAD
    }
}

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Render as a decimal with full WAD precision, trimming zeros.
        let whole = self.rate_wad / WAD;
        let frac = self.rate_wad % WAD;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let frac_str = format!("{:018}", frac);
            write!(f, "{}.{}", whole, frac_str.trim_end_matches('0'))
        }
    }
}

// ---------------------------------------------------------------------------
// PriceOracle
// ---------------------------------------------------------------------------

/// Adapter over a [`LiquidityPool`] that turns reserves into a rate.
pub struct PriceOracle {
    pool: Arc<dyn LiquidityPool>,
}

impl PriceOracle {
    /// Creates an oracle reading from `pool`.
    pub fn new(pool: Arc<dyn LiquidityPool>) -> Self {
        Self { pool }
    }

    /// Samples the current stable-per-native rate.
    ///
    /// Computed as `reserve_stable * WAD / reserve_native` — multiply
    /// before divide, so precision loss stays below the WAD scale.
    /// Read-only and safe to call any number of times.
    ///
    /// # Errors
    ///
    /// [`OracleError::Unavailable`] when either reserve is zero, or when
    /// the reserves are so lopsided the scaled ratio floors to zero.
    pub fn quote_price(&self) -> Result<ExchangeRate, OracleError> {
        let reserves = self.pool.reserves();
        if reserves.native == 0 || reserves.stable == 0 {
            return Err(OracleError::Unavailable {
                native: reserves.native,
                stable: reserves.stable,
            });
        }

        let rate_wad = math::mul_div_floor(reserves.stable, WAD, reserves.native)
            .ok_or(OracleError::Overflow)?;
        if rate_wad == 0 {
            // Stable reserve dwarfed by native reserve beyond WAD
            // precision; a zero rate is degenerate, refuse to report it.
            return Err(OracleError::Unavailable {
                native: reserves.native,
                stable: reserves.stable,
            });
        }

        Ok(ExchangeRate { rate_wad })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amm::{PoolError, PoolReserves};
    use crate::ledger::Address;
    use parking_lot::RwLock;

    /// Pool stub with settable reserves; swaps unsupported.
    struct StubPool {
        reserves: RwLock<PoolReserves>,
    }

    impl StubPool {
        fn new(native: u128, stable: u128) -> Self {
            Self {
                reserves: RwLock::new(PoolReserves { native, stable }),
            }
        }
    }

    impl LiquidityPool for StubPool {
        fn reserves(&self) -> PoolReserves {
            *self.reserves.read()
        }

        fn swap_native_for_stable(
            &self,
            _caller: &Address,
            _amount_in: u128,
            _min_out: u128,
        ) -> Result<u128, PoolError> {
            unimplemented!("stub pool does not swap")
        }
    }

    #[test]
    fn quote_is_reserve_ratio() {
        let oracle = PriceOracle::new(Arc::new(StubPool::new(100 * WAD, 200_000 * WAD)));
        let rate = oracle.quote_price().unwrap();
        assert_eq!(rate.as_wad(), 2_000 * WAD);
        assert_eq!(rate.whole_units(), 2_000);
    }

    #[test]
    fn quote_keeps_sub_unit_precision() {
        // 3 stable per 2 native = 1.5.
        let oracle = PriceOracle::new(Arc::new(StubPool::new(2 * WAD, 3 * WAD)));
        let rate = oracle.quote_price().unwrap();
        assert_eq!(rate.as_wad(), WAD + WAD / 2);
        assert_eq!(rate.to_string(), "1.5");
    }

    #[test]
    fn zero_native_reserve_unavailable() {
        let oracle = PriceOracle::new(Arc::new(StubPool::new(0, 200_000 * WAD)));
        assert!(matches!(
            oracle.quote_price(),
            Err(OracleError::Unavailable { .. })
        ));
    }

    #[test]
    fn zero_stable_reserve_unavailable() {
        let oracle = PriceOracle::new(Arc::new(StubPool::new(100 * WAD, 0)));
        assert!(matches!(
            oracle.quote_price(),
            Err(OracleError::Unavailable { .. })
        ));
    }

    #[test]
    fn rate_flooring_to_zero_refused() {
        // 1 stable smallest-unit against an astronomically large native
        // reserve floors below WAD precision.
        let oracle = PriceOracle::new(Arc::new(StubPool::new(u128::MAX / WAD, 1)));
        assert!(matches!(
            oracle.quote_price(),
            Err(OracleError::Unavailable { .. })
        ));
    }

    #[test]
    fn implied_output_scales_linearly() {
        let oracle = PriceOracle::new(Arc::new(StubPool::new(100 * WAD, 200_000 * WAD)));
        let rate = oracle.quote_price().unwrap();
        assert_eq!(rate.implied_stable_out(5 * WAD), Some(10_000 * WAD));
    }

    #[test]
    fn repeated_quotes_track_reserve_changes() {
        let pool = Arc::new(StubPool::new(100 * WAD, 200_000 * WAD));
        let oracle = PriceOracle::new(Arc::clone(&pool) as Arc<dyn LiquidityPool>);

        let first = oracle.quote_price().unwrap();
        *pool.reserves.write() = PoolReserves {
            native: 110 * WAD,
            stable: 190_000 * WAD,
        };
        let second = oracle.quote_price().unwrap();
        assert!(second.as_wad() < first.as_wad());
    }

    #[test]
    fn rate_serialization_roundtrip() {
        let oracle = PriceOracle::new(Arc::new(StubPool::new(WAD, 1_234 * WAD)));
        let rate = oracle.quote_price().unwrap();
        let json = serde_json::to_string(&rate).unwrap();
        let back: ExchangeRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);
    }
}
