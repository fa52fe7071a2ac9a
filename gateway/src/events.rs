//! # Gateway Events
//!
//! Every completed operation leaves an observable receipt: `Swapped`,
//! `Entered`, or `Exited`. Events exist for external monitoring — the
//! gateway's own logic never reads them back. Each record carries a UUID
//! and a UTC timestamp and serializes to JSON for downstream indexing.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::Address;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An observable effect of a completed gateway operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GatewayEvent {
    /// Native currency was swapped for stable asset.
    Swapped {
        /// The account that initiated the swap.
        caller: Address,
        /// Native currency spent, smallest units.
        native_in: u128,
        /// Stable asset credited to the caller.
        stable_out: u128,
    },
    /// Stable asset was deposited into the vault for shares.
    Entered {
        /// The depositing account.
        caller: Address,
        /// Stable asset pulled into the vault.
        stable_in: u128,
        /// Shares minted to the caller.
        shares_out: u128,
    },
    /// Vault shares were redeemed for stable asset.
    Exited {
        /// The redeeming account.
        caller: Address,
        /// Shares burned.
        shares_in: u128,
        /// Stable asset paid out to the caller.
        stable_out: u128,
    },
}

/// A logged event with identity and timing metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// When the operation completed (UTC).
    pub at: DateTime<Utc>,
    /// The observable effect.
    pub event: GatewayEvent,
}

// ---------------------------------------------------------------------------
// Event Log
// ---------------------------------------------------------------------------

/// Append-only in-memory event log.
///
/// Records are appended only after an operation's state effects are
/// final, so the log never shows an event for a reverted operation.
pub struct EventLog {
    records: RwLock<Vec<EventRecord>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Appends an event, returning the stored record.
    pub fn record(&self, event: GatewayEvent) -> EventRecord {
        let record = EventRecord {
            id: Uuid::new_v4(),
            at: Utc::now(),
            event,
        };
        self.records.write().push(record.clone());
        record
    }

    /// A snapshot of all records in append order.
    pub fn all(&self) -> Vec<EventRecord> {
        self.records.read().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let log = EventLog::new();
        let caller = Address::new("aurum:alice");

        log.record(GatewayEvent::Swapped {
            caller: caller.clone(),
            native_in: 5,
            stable_out: 9_000,
        });
        log.record(GatewayEvent::Entered {
            caller: caller.clone(),
            stable_in: 1_000,
            shares_out: 1_000,
        });

        let all = log.all();
        assert_eq!(all.len(), 2);
        assert!(matches!(all[0].event, GatewayEvent::Swapped { .. }));
        assert!(matches!(all[1].event, GatewayEvent::Entered { .. }));
    }

    #[test]
    fn records_have_unique_ids() {
        let log = EventLog::new();
        let caller = Address::new("aurum:alice");

        let a = log.record(GatewayEvent::Exited {
            caller: caller.clone(),
            shares_in: 500,
            stable_out: 500,
        });
        let b = log.record(GatewayEvent::Exited {
            caller,
            shares_in: 500,
            stable_out: 500,
        });
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn event_serialization_roundtrip() {
        let log = EventLog::new();
        let record = log.record(GatewayEvent::Entered {
            caller: Address::new("aurum:alice"),
            stable_in: 1_000,
            shares_out: 1_000,
        });

        let json = serde_json::to_string(&record).expect("serialize");
        let recovered: EventRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(recovered.event, record.event);
        assert_eq!(recovered.id, record.id);
    }

    #[test]
    fn empty_log() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }
}
