//! Map the local clock time of a toll gate passage to the fee charged for it.
//!
//! A [`FeeSchedule`] is an ordered list of non-overlapping [`FeeBand`]s. Each band covers a
//! half-open interval of the clock, `[start, end)`, and any time not covered is free of charge.
//!
//! ### Example
//! ```rust
//! # use congestion_tax::fees::FeeSchedule;
//! # use chrono::NaiveTime;
//! let schedule = FeeSchedule::gothenburg().unwrap();
//! assert_eq!(schedule.fee_for(&NaiveTime::from_hms_opt(6, 29, 0).unwrap()), 8);
//! assert_eq!(schedule.fee_for(&NaiveTime::from_hms_opt(6, 30, 0).unwrap()), 13);
//! assert_eq!(schedule.fee_for(&NaiveTime::from_hms_opt(19, 30, 0).unwrap()), 0);
//! ```

mod schedule;

pub use crate::fees::schedule::{FeeBand, FeeSchedule};
