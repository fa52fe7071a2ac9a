//! Top-level error taxonomy.
//!
//! Each subsystem keeps its own error enum close to the code that raises
//! it; this module unifies them for callers that drive the gateway facade
//! and want a single type to match on.

use thiserror::Error;

use crate::amm::PoolError;
use crate::guard::ReentrantCall;
use crate::ledger::LedgerError;
use crate::oracle::OracleError;
use crate::swap::SwapError;
use crate::vault::VaultError;

/// Unified error for gateway facade operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A gateway entry point was re-entered while already executing.
    #[error(transparent)]
    Reentrancy(#[from] ReentrantCall),

    /// Price discovery failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// A swap failed.
    #[error(transparent)]
    Swap(#[from] SwapError),

    /// A vault entry or exit failed.
    #[error(transparent)]
    Vault(#[from] VaultError),

    /// A pool operation failed outside the swap path.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A direct ledger movement failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl GatewayError {
    /// Whether the error indicates caller input that can be corrected and
    /// retried (as opposed to an internal accounting fault).
    pub fn is_caller_fault(&self) -> bool {
        match self {
            GatewayError::Reentrancy(_) => true,
            GatewayError::Oracle(_) => false,
            GatewayError::Swap(SwapError::InsufficientInput) => true,
            GatewayError::Swap(SwapError::Failed(pool)) => pool_is_caller_fault(pool),
            GatewayError::Vault(vault) => matches!(
                vault,
                VaultError::ZeroDeposit
                    | VaultError::ZeroRedemption
                    | VaultError::InsufficientShares { .. }
                    | VaultError::DustDeposit { .. }
                    | VaultError::Ledger(
                        LedgerError::InsufficientBalance { .. }
                            | LedgerError::AllowanceExceeded { .. }
                    )
            ),
            GatewayError::Pool(pool) => pool_is_caller_fault(pool),
            GatewayError::Ledger(ledger) => matches!(
                ledger,
                LedgerError::InsufficientBalance { .. } | LedgerError::AllowanceExceeded { .. }
            ),
        }
    }
}

fn pool_is_caller_fault(err: &PoolError) -> bool {
    matches!(
        err,
        PoolError::DustOutput { .. }
            | PoolError::BelowMinimumOut { .. }
            | PoolError::Ledger(
                LedgerError::InsufficientBalance { .. } | LedgerError::AllowanceExceeded { .. }
            )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_deposit_is_caller_fault() {
        let err = GatewayError::from(VaultError::ZeroDeposit);
        assert!(err.is_caller_fault());
    }

    #[test]
    fn empty_reserves_is_not_caller_fault() {
        let err = GatewayError::from(PoolError::EmptyReserves {
            native: 0,
            stable: 0,
        });
        assert!(!err.is_caller_fault());
    }

    #[test]
    fn display_passes_through_source() {
        let err = GatewayError::from(VaultError::ZeroRedemption);
        assert_eq!(
            err.to_string(),
            "zero redemption: exit amount must be positive"
        );
    }
}
