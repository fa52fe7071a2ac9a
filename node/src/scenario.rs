//! # Journey Scenario
//!
//! Assembles a complete in-memory gateway world — native ledger, stable
//! ledger, share ledger, constant-product pool, facade — and drives one
//! user through the full journey: quote, swap native for stable, approve
//! and enter the vault, accrue yield, approve shares and exit. Produces
//! a serializable settlement report for the CLI to print.

use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use serde::Serialize;

use aurum_gateway::amm::ConstantProductPool;
use aurum_gateway::asset::{stable_asset, vault_share_asset};
use aurum_gateway::config::{BPS_DENOMINATOR, MAX_SANE_RATE_WAD, WAD};
use aurum_gateway::events::EventRecord;
use aurum_gateway::ledger::{Address, FungibleLedger, InMemoryLedger, NativeLedger};
use aurum_gateway::math;
use aurum_gateway::StableGateway;

/// Scenario inputs, in whole units (scaled to smallest units internally).
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub pool_native: u64,
    pub pool_stable: u64,
    pub user_native: u64,
    pub swap_in: u64,
    pub yield_bps: u64,
}

/// Settlement report for one full journey. Amounts in smallest units.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    /// Native→stable rate quoted before the swap, WAD fixed-point.
    pub quote_before_wad: u128,
    /// Rate quoted after the swap moved the reserves.
    pub quote_after_wad: u128,
    /// Stable received for the swap input.
    pub stable_received: u128,
    /// Vault shares minted for the deposit.
    pub shares_minted: u128,
    /// Yield credited to the vault before exit.
    pub yield_accrued: u128,
    /// Stable paid out when the position was closed.
    pub stable_paid_out: u128,
    /// User balances after settlement.
    pub final_native: u128,
    pub final_stable: u128,
    /// Every settled operation, in order.
    pub events: Vec<EventRecord>,
}

/// Runs the journey and returns the settlement report.
///
/// Fails cleanly if the configuration is unusable (empty reserves, swap
/// larger than the user's funding) or any gateway operation refuses.
pub fn run(config: &ScenarioConfig) -> Result<ScenarioReport> {
    ensure!(
        config.pool_native > 0 && config.pool_stable > 0,
        "pool reserves must both be positive"
    );
    ensure!(
        config.swap_in <= config.user_native,
        "swap input {} exceeds user funding {}",
        config.swap_in,
        config.user_native
    );

    let issuer = Address::new("aurum:issuer");
    let pool_addr = Address::new("aurum:pool");
    let vault_addr = Address::new("aurum:vault");
    let user = Address::new("aurum:user");

    // --- Ledgers ---
    let native = Arc::new(NativeLedger::new());
    let stable = Arc::new(InMemoryLedger::new(stable_asset(), issuer.clone()));
    let shares = Arc::new(InMemoryLedger::new(
        vault_share_asset(vault_addr.as_str()),
        vault_addr.clone(),
    ));

    native
        .credit(&pool_addr, scale(config.pool_native))
        .context("seeding pool native reserve")?;
    stable
        .mint(&issuer, &pool_addr, scale(config.pool_stable))
        .context("seeding pool stable reserve")?;
    native
        .credit(&user, scale(config.user_native))
        .context("funding user")?;

    // --- Pool and gateway ---
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

    // --- Quote and swap ---
    let quote_before = gateway.quote_price().context("quoting pre-swap price")?;
    tracing::info!(rate = %quote_before, "pre-swap quote");
    if quote_before.as_wad() > MAX_SANE_RATE_WAD {
        tracing::warn!(
            rate_wad = quote_before.as_wad(),
            bound_wad = MAX_SANE_RATE_WAD,
            "quoted rate exceeds the sanity bound; reserves look mispriced"
        );
    }

    let stable_received = gateway
        .swap_native_for_stable(&user, scale(config.swap_in))
        .context("swapping native for stable")?;

    let quote_after = gateway.quote_price().context("quoting post-swap price")?;

    // --- Vault entry ---
    stable.approve(&user, gateway.vault_address(), stable_received);
    let shares_minted = gateway
        .enter(&user, stable_received)
        .context("entering vault")?;

    // --- Simulated yield ---
    let yield_accrued = math::mul_div_floor(
        stable_received,
        config.yield_bps as u128,
        BPS_DENOMINATOR,
    )
    .context("computing yield")?;
    if yield_accrued > 0 {
        stable
            .mint(&issuer, gateway.vault_address(), yield_accrued)
            .context("crediting vault yield")?;
    }

    // --- Vault exit ---
    shares.approve(&user, gateway.vault_address(), shares_minted);
    let stable_paid_out = gateway.exit(&user, shares_minted).context("exiting vault")?;

    Ok(ScenarioReport {
        quote_before_wad: quote_before.as_wad(),
        quote_after_wad: quote_after.as_wad(),
        stable_received,
        shares_minted,
        yield_accrued,
        stable_paid_out,
        final_native: native.balance_of(&user),
        final_stable: stable.balance_of(&user),
        events: gateway.events().all(),
    })
}

/// Whole units to smallest units. The CLI caps inputs at u64, so this
/// cannot overflow u128.
fn scale(whole: u64) -> u128 {
    whole as u128 * WAD
}
