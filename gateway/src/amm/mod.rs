//! # AMM Module — Swap Counterparty & Price Source
//!
//! The pool is an external collaborator: it quotes the price (through its
//! reserves) and takes the other side of every swap. The gateway reaches
//! it through the [`LiquidityPool`] trait and never assumes anything
//! about its curve beyond what the trait exposes.
//!
//! ```text
//! pool.rs             — LiquidityPool trait, reserves snapshot, errors
//! constant_product.rs — reference x·y=k pool for tests and local runs
//! ```

pub mod constant_product;
pub mod pool;

pub use constant_product::ConstantProductPool;
pub use pool::{LiquidityPool, PoolError, PoolReserves};
