// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # AURUM Gateway — Core Library
//!
//! The on-chain surface of AURUM: a stable-asset gateway that takes users
//! from the native asset to a yield position in three honest moves —
//! quote, swap, deposit — and back out again without losing dust along
//! the way.
//!
//! AURUM takes a pragmatic stance: every amount is an integer in smallest
//! units (floating point and money do not mix), every rate is WAD
//! fixed-point, and every division floors in favor of whichever pool of
//! funds backs other people's claims.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of a
//! financial gateway:
//!
//! - **ledger** — Fungible-asset accounting: balances, allowances, supply.
//! - **asset** — Asset identities and metadata. Names are derived, not assigned.
//! - **amm** — Constant-product liquidity pool. x·y = k, fees included.
//! - **oracle** — Price discovery from pool reserves. The pool is the oracle.
//! - **swap** — Native-for-stable swap engine over any liquidity pool.
//! - **vault** — Share-based vault entry and exit (the part people sue over).
//! - **gateway** — The facade: one guard, one event log, three operations.
//! - **guard** — Reentrancy protection. Boring on purpose.
//! - **events** — Append-only log of settled operations.
//! - **math** — Pure share and swap arithmetic. No state, no mercy.
//! - **config** — Gateway constants and parameters.
//!
//! ## Design Philosophy
//!
//! 1. Checked arithmetic everywhere — overflow is an error, never a wrap.
//! 2. One fallible external step per operation, ordered first.
//! 3. Every public API is documented. Internal shame is documented too.
//! 4. If it touches money, it has tests. Plural.

pub mod amm;
pub mod asset;
pub mod config;
pub mod error;
pub mod events;
pub mod gateway;
pub mod guard;
pub mod ledger;
pub mod math;
pub mod oracle;
pub mod swap;
pub mod vault;

pub use error::GatewayError;
pub use gateway::StableGateway;
