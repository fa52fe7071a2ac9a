//! # Fixed-Point Ledger Math
//!
//! Pure arithmetic over `u128` smallest-unit amounts. No floating point,
//! no wrapping — wrapping arithmetic and money do not mix, so every
//! operation here is checked and returns `None` on overflow for the
//! caller to surface as an explicit error.
//!
//! The one rule that matters: **multiply before dividing, and floor**.
//! Share-price and swap-output computations round down in the pool's
//! favor, so cumulative rounding strands dust in the vault instead of
//! letting redeemable claims creep past actual holdings.

/// Computes `a * b / denom`, flooring the division.
///
/// Returns `None` if the intermediate product overflows `u128` or if
/// `denom` is zero. Callers decide which error that becomes — the vault
/// treats it as a hard overflow, the oracle as an unavailable price.
pub fn mul_div_floor(a: u128, b: u128, denom: u128) -> Option<u128> {
    if denom == 0 {
        return None;
    }
    a.checked_mul(b).map(|product| product / denom)
}

/// Applies a basis-point fee to an input amount, returning the amount
/// that remains after the fee. Floors, so the fee rounds up.
pub fn apply_fee_bps(amount: u128, fee_bps: u128, denominator: u128) -> Option<u128> {
    let keep_bps = denominator.checked_sub(fee_bps)?;
    mul_div_floor(amount, keep_bps, denominator)
}

/// Shares minted for a deposit against the current supply and holdings.
///
/// Bootstrap case: when no shares exist yet, the first depositor gets
/// shares 1:1 with the deposit, establishing the initial share price.
/// Otherwise pro-rata: `deposit * supply / holdings`, floored.
///
/// `holdings` must be the vault's stable balance *before* the deposit is
/// credited — sampling it after the pull dilutes the depositor.
///
/// Returns `None` on overflow, or when shares exist against zero
/// holdings (a broken vault that must not accept deposits at that price).
pub fn shares_for_deposit(supply: u128, holdings: u128, deposit: u128) -> Option<u128> {
    if supply == 0 {
        Some(deposit)
    } else {
        // supply > 0 with holdings == 0 would mint infinite-price shares.
        if holdings == 0 {
            return None;
        }
        mul_div_floor(deposit, supply, holdings)
    }
}

/// Stable-asset payout for burning `shares` against the current supply
/// and holdings: `shares * holdings / supply`, floored.
///
/// Returns `None` when no shares exist or on overflow. A full burn of
/// the entire supply pays out at most `holdings`, never more.
pub fn payout_for_shares(supply: u128, holdings: u128, shares: u128) -> Option<u128> {
    if supply == 0 {
        return None;
    }
    mul_div_floor(shares, holdings, supply)
}

/// Constant-product swap output: given reserves `(reserve_in, reserve_out)`
/// and a post-fee input, returns the output that keeps `x * y` constant:
/// `out = reserve_out * in / (reserve_in + in)`, floored.
///
/// Returns `None` on empty reserves or overflow. A floored result of
/// zero is a valid return here — the caller decides whether dust trades
/// are rejected.
pub fn constant_product_out(reserve_in: u128, reserve_out: u128, amount_in: u128) -> Option<u128> {
    if reserve_in == 0 || reserve_out == 0 {
        return None;
    }
    let new_reserve_in = reserve_in.checked_add(amount_in)?;
    mul_div_floor(reserve_out, amount_in, new_reserve_in)
}
