//! Record charged passages and apply the single charge rule.
//!
//! Passages are grouped into charge windows. A window is opened by a passage and spans the
//! following `window` duration inclusive; every later passage inside it belongs to the same window.
//! A window is charged once, at the highest fee of any passage inside it. A passage after the
//! window has closed opens a new one.
//!
//! A [`ChargeLedger`] is the sole owner of this rule. One ledger covers one day of passages.
//!
//! ### Example
//! ```rust
//! # use congestion_tax::ledger::ChargeLedger;
//! # use congestion_tax::calendars::ndt;
//! let mut ledger = ChargeLedger::default();
//! assert_eq!(ledger.record(ndt(2013, 2, 8, 6, 15), 8), 8);
//! assert_eq!(ledger.record(ndt(2013, 2, 8, 6, 45), 13), 5); // same window, only the increment
//! assert_eq!(ledger.record(ndt(2013, 2, 8, 9, 0), 13), 13); // new window
//! assert_eq!(ledger.total(), 26);
//! ```

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The length of a charge window in the Gothenburg rules.
pub const DEFAULT_WINDOW_MINUTES: i64 = 60;

/// A passage recorded in a [`ChargeLedger`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeEvent {
    /// Time of the passage.
    pub at: NaiveDateTime,
    /// The fee of the passage considered on its own.
    pub fee: i32,
    /// The amount actually added to the total after applying the single charge rule.
    pub charged: i32,
}

/// An ordered log of passages and the charges they incurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeLedger {
    window: Duration,
    window_start: Option<NaiveDateTime>,
    window_max: i32,
    events: Vec<ChargeEvent>,
    total: i32,
}

impl ChargeLedger {
    /// Create an empty ledger with the given charge window length.
    pub fn new(window: Duration) -> Self {
        ChargeLedger {
            window,
            window_start: None,
            window_max: 0,
            events: Vec::new(),
            total: 0,
        }
    }

    /// Record a passage with its standalone `fee` and return the amount charged for it.
    ///
    /// Passages are expected in ascending order of time. A passage earlier than the current
    /// window start is treated as belonging to that window. The running total saturates at
    /// `i32::MAX`.
    pub fn record(&mut self, at: NaiveDateTime, fee: i32) -> i32 {
        let in_window = self
            .window_start
            .is_some_and(|start| at - start <= self.window);
        let charged = if in_window {
            let increment = fee.saturating_sub(self.window_max).max(0);
            self.window_max = self.window_max.max(fee);
            increment
        } else {
            self.window_start = Some(at);
            self.window_max = fee;
            fee
        };
        trace!(%at, fee, charged, in_window, "recorded passage");
        self.total = self.total.saturating_add(charged);
        self.events.push(ChargeEvent { at, fee, charged });
        charged
    }

    /// Return the sum of all charges, before any daily maximum is applied.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Return the recorded passages in the order they were recorded.
    pub fn events(&self) -> &[ChargeEvent] {
        &self.events
    }

    /// Consume the ledger and return its recorded passages.
    pub fn into_events(self) -> Vec<ChargeEvent> {
        self.events
    }

    /// Return the charge window length.
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for ChargeLedger {
    fn default() -> Self {
        ChargeLedger::new(Duration::minutes(DEFAULT_WINDOW_MINUTES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::ndt;

    #[test]
    fn first_passage_charged_in_full() {
        let mut ledger = ChargeLedger::default();
        assert_eq!(ledger.record(ndt(2013, 2, 7, 6, 23), 8), 8);
        assert_eq!(ledger.total(), 8);
        assert_eq!(
            ledger.events(),
            &[ChargeEvent {
                at: ndt(2013, 2, 7, 6, 23),
                fee: 8,
                charged: 8
            }]
        );
    }

    #[test]
    fn lower_fee_in_window_is_free() {
        let mut ledger = ChargeLedger::default();
        ledger.record(ndt(2013, 2, 7, 8, 10), 18);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 8, 40), 13), 0);
        assert_eq!(ledger.total(), 18);
    }

    #[test]
    fn window_charged_at_max() {
        let mut ledger = ChargeLedger::default();
        ledger.record(ndt(2013, 2, 7, 6, 0), 8);
        ledger.record(ndt(2013, 2, 7, 6, 30), 13);
        ledger.record(ndt(2013, 2, 7, 6, 50), 8);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 6, 59), 18), 5);
        assert_eq!(ledger.total(), 18);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let mut ledger = ChargeLedger::default();
        ledger.record(ndt(2013, 2, 7, 6, 0), 8);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 7, 0), 13), 5);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 7, 1), 13), 13);
        assert_eq!(ledger.total(), 26);
    }

    #[test]
    fn window_anchored_at_opening_passage() {
        // 07:50 is within 60 minutes of 07:00 but not of 06:45, which opened the window.
        let mut ledger = ChargeLedger::default();
        ledger.record(ndt(2013, 2, 7, 6, 45), 13);
        ledger.record(ndt(2013, 2, 7, 7, 0), 13);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 7, 50), 13), 13);
        assert_eq!(ledger.total(), 26);
    }

    #[test]
    fn free_passage_opens_window() {
        let mut ledger = ChargeLedger::default();
        assert_eq!(ledger.record(ndt(2013, 2, 7, 5, 30), 0), 0);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 6, 15), 8), 8);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 6, 25), 8), 0);
        // more than 60 minutes after 05:30
        assert_eq!(ledger.record(ndt(2013, 2, 7, 6, 40), 13), 13);
        assert_eq!(ledger.total(), 21);
    }

    #[test]
    fn custom_window() {
        let mut ledger = ChargeLedger::new(Duration::minutes(15));
        ledger.record(ndt(2013, 2, 7, 6, 0), 8);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 6, 20), 8), 8);
        assert_eq!(ledger.window(), Duration::minutes(15));
    }

    #[test]
    fn total_saturates() {
        let mut ledger = ChargeLedger::default();
        ledger.record(ndt(2013, 2, 7, 6, 15), i32::MAX);
        assert_eq!(ledger.record(ndt(2013, 2, 7, 9, 15), i32::MAX), i32::MAX);
        assert_eq!(ledger.total(), i32::MAX);
    }

    #[test]
    fn into_events_preserves_order() {
        let mut ledger = ChargeLedger::default();
        ledger.record(ndt(2013, 2, 7, 6, 0), 8);
        ledger.record(ndt(2013, 2, 7, 9, 0), 13);
        let events = ledger.into_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].at, ndt(2013, 2, 7, 9, 0));
    }
}
