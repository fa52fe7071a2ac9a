// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # AURUM Gateway Node
//!
//! Entry point for the `aurum-node` binary. Parses CLI arguments,
//! initializes logging, and drives the gateway journey over in-memory
//! ledgers.
//!
//! The binary supports three subcommands:
//!
//! - `run`     — run the full quote/swap/enter/exit journey
//! - `quote`   — print the rate implied by a pair of reserves
//! - `version` — print build version information

mod cli;
mod logging;
mod scenario;

use anyhow::{bail, Context, Result};
use clap::Parser;

use aurum_gateway::config::{GATEWAY_VERSION, WAD};
use aurum_gateway::math;
use aurum_gateway::oracle::ExchangeRate;

use cli::{AurumNodeCli, Commands, QuoteArgs, RunArgs};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = AurumNodeCli::parse();

    match cli.command {
        Commands::Run(args) => run_journey(args),
        Commands::Quote(args) => print_quote(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Runs the configured journey and prints the settlement report to
/// stdout as JSON.
fn run_journey(args: RunArgs) -> Result<()> {
    logging::init_logging(
        "aurum_node=info,aurum_gateway=info",
        LogFormat::from_str_lossy(&args.log_format),
    );

    tracing::info!(
        pool_native = args.pool_native,
        pool_stable = args.pool_stable,
        user_native = args.user_native,
        swap_in = args.swap_in,
        yield_bps = args.yield_bps,
        "starting aurum-node journey"
    );

    let config = scenario::ScenarioConfig {
        pool_native: args.pool_native,
        pool_stable: args.pool_stable,
        user_native: args.user_native,
        swap_in: args.swap_in,
        yield_bps: args.yield_bps,
    };

    let report = scenario::run(&config)?;
    tracing::info!(
        stable_received = report.stable_received,
        stable_paid_out = report.stable_paid_out,
        "journey settled"
    );

    let json = serde_json::to_string_pretty(&report).context("serializing report")?;
    println!("{}", json);
    Ok(())
}

/// Prints the native→stable rate implied by the given reserves.
fn print_quote(args: QuoteArgs) -> Result<()> {
    if args.native == 0 {
        bail!("native reserve must be positive");
    }
    let rate_wad = math::mul_div_floor(args.stable as u128, WAD, args.native as u128)
        .context("rate overflow")?;
    let rate = ExchangeRate::from_wad(rate_wad);
    println!("{}", rate);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("aurum-node {}", env!("CARGO_PKG_VERSION"));
    println!("gateway    {}", GATEWAY_VERSION);
    println!("rustc      {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
