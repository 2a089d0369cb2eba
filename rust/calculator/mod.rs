//! Calculate the congestion tax owed by one vehicle for one day.
//!
//! The [`TaxCalculator`] combines the components of its [`TaxRules`]:
//!
//! - a passage on a toll-free date, or by an exempt vehicle, has no fee,
//! - otherwise the fee is read from the [`FeeSchedule`](crate::fees::FeeSchedule) by clock time,
//! - fees are folded into a fresh [`ChargeLedger`] under the single charge rule,
//! - the day's total is capped at the daily maximum.
//!
//! The calculator holds only immutable rules, so one instance may be shared across days and
//! threads.
//!
//! ### Example
//! ```rust
//! # use congestion_tax::calculator::TaxCalculator;
//! # use congestion_tax::calendars::ndt;
//! # use congestion_tax::vehicles::VehicleCategory;
//! let calc = TaxCalculator::gothenburg_2013().unwrap();
//! let passages = [
//!     ndt(2013, 2, 8, 6, 45), // 13
//!     ndt(2013, 2, 8, 6, 15), // 8, same window as 06:45
//!     ndt(2013, 2, 8, 9, 0),  // 13
//! ];
//! assert_eq!(calc.get_tax(Some(&VehicleCategory::Car), &passages).unwrap(), 26);
//! assert_eq!(calc.get_tax(Some(&VehicleCategory::Bus), &passages).unwrap(), 0);
//! ```

use chrono::{Duration, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendars::TollFreeCalendar;
use crate::error::{TaxError, TaxResult};
use crate::ledger::{ChargeEvent, ChargeLedger};
use crate::rules::TaxRules;
use crate::vehicles::Vehicle;

/// The outcome of a daily assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTax {
    /// Tax owed for the day, after the daily maximum.
    pub total: i32,
    /// Sum of charges before the daily maximum.
    pub uncapped: i32,
    /// Every passage in ascending time order with its fee and charge.
    pub charges: Vec<ChargeEvent>,
}

impl DailyTax {
    /// Returns whether the daily maximum reduced the total.
    pub fn is_capped(&self) -> bool {
        self.total < self.uncapped
    }
}

/// Congestion tax calculator for a fixed set of [`TaxRules`].
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    rules: TaxRules,
    window: Duration,
}

impl TaxCalculator {
    /// Create a calculator. Returns an error if the rules are invalid.
    pub fn new(rules: TaxRules) -> TaxResult<Self> {
        rules.validate()?;
        let window = rules.window()?;
        Ok(TaxCalculator { rules, window })
    }

    /// Create a calculator for the Gothenburg 2013 rules.
    pub fn gothenburg_2013() -> TaxResult<Self> {
        TaxCalculator::new(TaxRules::gothenburg_2013()?)
    }

    /// Return the rules applied by the calculator.
    pub fn rules(&self) -> &TaxRules {
        &self.rules
    }

    /// Create an empty [`ChargeLedger`] using the calculator's charge window.
    pub fn new_ledger(&self) -> ChargeLedger {
        ChargeLedger::new(self.window)
    }

    /// Returns whether the passage is free regardless of its time, i.e. on a toll-free date or by
    /// an exempt vehicle.
    pub fn is_free_passage<V: Vehicle + ?Sized>(&self, at: &NaiveDateTime, vehicle: &V) -> bool {
        self.rules.exemptions.is_exempt(&vehicle.category())
            || self.rules.calendar.is_toll_free_date(&at.date())
    }

    /// Return the fee for a single passage, ignoring any other passages.
    ///
    /// This is zero on a toll-free date or for an exempt vehicle, and the scheduled fee for the
    /// clock time otherwise.
    pub fn passage_fee<V: Vehicle + ?Sized>(&self, at: &NaiveDateTime, vehicle: &V) -> i32 {
        if self.is_free_passage(at, vehicle) {
            return 0;
        }
        self.rules.fees.fee_for(&at.time())
    }

    /// Record one passage in a caller-owned `ledger` and return the day's running total.
    ///
    /// Returns zero for a passage on a toll-free date or by an exempt vehicle; the passage is
    /// still recorded with a zero fee. Otherwise the running total is returned, capped at the
    /// daily maximum. Recording every passage of a day in ascending time order into one fresh
    /// ledger returns, on the last passage, the same amount as
    /// [`get_tax`](TaxCalculator::get_tax) for those passages.
    ///
    /// # Examples
    /// ```rust
    /// # use congestion_tax::calculator::TaxCalculator;
    /// # use congestion_tax::calendars::ndt;
    /// # use congestion_tax::vehicles::VehicleCategory;
    /// let calc = TaxCalculator::gothenburg_2013().unwrap();
    /// let mut ledger = calc.new_ledger();
    /// assert_eq!(calc.get_toll_fee(&mut ledger, ndt(2013, 2, 8, 6, 15), &VehicleCategory::Car), 8);
    /// assert_eq!(calc.get_toll_fee(&mut ledger, ndt(2013, 2, 8, 6, 45), &VehicleCategory::Car), 13);
    /// assert_eq!(calc.get_toll_fee(&mut ledger, ndt(2013, 2, 8, 6, 50), &VehicleCategory::Bus), 0);
    /// ```
    pub fn get_toll_fee<V: Vehicle + ?Sized>(
        &self,
        ledger: &mut ChargeLedger,
        at: NaiveDateTime,
        vehicle: &V,
    ) -> i32 {
        if self.is_free_passage(&at, vehicle) {
            ledger.record(at, 0);
            return 0;
        }
        ledger.record(at, self.rules.fees.fee_for(&at.time()));
        ledger.total().min(self.rules.max_daily_fee)
    }

    /// Assess all passages of one day and return the breakdown.
    ///
    /// Passages may be given in any order. Returns an error if `vehicle` is `None` or no passages
    /// are given.
    pub fn assess<V: Vehicle + ?Sized>(
        &self,
        vehicle: Option<&V>,
        dates: &[NaiveDateTime],
    ) -> TaxResult<DailyTax> {
        let vehicle = vehicle.ok_or_else(|| {
            TaxError::InvalidArgument("`vehicle` cannot be absent.".to_string())
        })?;
        if dates.is_empty() {
            return Err(TaxError::InvalidArgument(
                "`dates` must contain at least one passage.".to_string(),
            ));
        }

        let dates: Vec<NaiveDateTime> = dates.iter().copied().sorted().collect();
        let days = dates.iter().map(|d| d.date()).dedup().count();
        if days > 1 {
            warn!(
                days,
                first = %dates[0],
                last = %dates[dates.len() - 1],
                "passages span more than one day; assessing them as a single day"
            );
        }

        let mut ledger = self.new_ledger();
        for at in dates {
            let fee = self.passage_fee(&at, vehicle);
            ledger.record(at, fee);
        }

        let uncapped = ledger.total();
        let total = uncapped.min(self.rules.max_daily_fee);
        debug!(
            category = %vehicle.category(),
            passages = ledger.events().len(),
            uncapped,
            total,
            "assessed congestion tax"
        );
        Ok(DailyTax {
            total,
            uncapped,
            charges: ledger.into_events(),
        })
    }

    /// Calculate the total congestion tax for one day.
    ///
    /// Returns an error if `vehicle` is `None` or no passages are given.
    pub fn get_tax<V: Vehicle + ?Sized>(
        &self,
        vehicle: Option<&V>,
        dates: &[NaiveDateTime],
    ) -> TaxResult<i32> {
        Ok(self.assess(vehicle, dates)?.total)
    }
}
