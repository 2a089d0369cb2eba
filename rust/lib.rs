//! Calculate Gothenburg style congestion tax for a vehicle's passages through toll gates.
//!
//! The crate is organised around a single [`TaxCalculator`](calculator::TaxCalculator), whose
//! behaviour is fully determined by its [`TaxRules`](rules::TaxRules):
//!
//! - [`calendars`]: weekends and holidays on which no tax is charged,
//! - [`fees`]: the fee for a passage by time of day,
//! - [`vehicles`]: vehicle categories and those exempt from tax,
//! - [`ledger`]: the single charge rule grouping passages into charge windows.
//!
//! Rule types serialize to and from JSON with the [`json::JSON`] trait.


pub mod error;
pub use error::{TaxError, TaxResult};

pub mod json;

pub mod calendars;
pub mod fees;
pub mod ledger;
pub mod vehicles;

pub mod rules;

pub mod calculator;
pub use calculator::{DailyTax, TaxCalculator};
