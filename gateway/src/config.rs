//! # Gateway Configuration & Constants
//!
//! Every magic number in AURUM lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! These values are part of the gateway's observable behavior — the swap
//! fee and fixed-point scale in particular leak into every quoted price —
//! so changing them after deployment changes what callers see.

// ---------------------------------------------------------------------------
// Fixed-Point Arithmetic
// ---------------------------------------------------------------------------

/// The fixed-point scale for exchange rates: 10^18.
///
/// A rate of `1 WAD` means one unit of stable asset per unit of native
/// currency. All rate arithmetic multiplies before dividing and stays in
/// `u128`, so no precision is lost below this scale.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Decimal places of the native currency's smallest unit.
pub const NATIVE_DECIMALS: u8 = 18;

/// Decimal places of the stable asset's smallest unit.
pub const STABLE_DECIMALS: u8 = 18;

// ---------------------------------------------------------------------------
// Pool Parameters
// ---------------------------------------------------------------------------

/// Swap fee charged by the reference constant-product pool, in basis
/// points taken from the input amount. 30 bps = 0.30%, the classic
/// two-asset AMM fee.
pub const POOL_FEE_BPS: u128 = 30;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u128 = 10_000;

// ---------------------------------------------------------------------------
// Sanity Bounds
// ---------------------------------------------------------------------------

/// Upper bound on a believable stable-per-native exchange rate: 10,000
/// stable units per native unit, WAD-scaled.
///
/// A quote above this almost certainly means a drained or mispriced pool.
/// The oracle itself does not enforce this — it reports what the reserves
/// say — but monitoring and the simulation assert against it.
pub const MAX_SANE_RATE_WAD: u128 = 10_000 * WAD;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Human-readable prefix for account addresses: `aurum:<hex-pubkey>`.
pub const ADDRESS_HRP: &str = "aurum";

/// Gateway version string, assembled at compile time.
pub const GATEWAY_VERSION: &str = env!("CARGO_PKG_VERSION");
