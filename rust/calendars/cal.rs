use chrono::prelude::*;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::calendars::TollFreeCalendar;
use crate::error::{TaxError, TaxResult};

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Create a `NaiveDateTime` from a date and a local clock time in hours and minutes.
///
/// Panics if date or time values are invalid.
pub fn ndt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    nd(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("`hour`, `minute` are invalid.")
}

/// A toll-free calendar with a weekend mask and a singular list of holidays.
///
/// A toll-free calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week on which no tax is charged. In Sweden
///   these are `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which defines specific dates, outside of the weekend, on which no tax is charged.
///
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of toll-free dates. `week_mask` is a vector of days
    /// (0=Mon,.., 6=Sun) that are toll-free in every week.
    pub fn try_new(holidays: Vec<NaiveDate>, week_mask: Vec<u8>) -> TaxResult<Self> {
        let week_mask = week_mask
            .into_iter()
            .map(|v| {
                Weekday::try_from(v).map_err(|_| {
                    TaxError::InvalidCalendar(format!("`week_mask` value {} is not in 0..=6.", v))
                })
            })
            .collect::<TaxResult<HashSet<Weekday>>>()?;
        Ok(Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask,
        })
    }

    /// Create a calendar from inclusive holiday ranges.
    ///
    /// Each range is `(year, month, first_day, last_day)` so that a single day is given with
    /// `first_day == last_day`.
    ///
    /// # Examples
    /// ```rust
    /// # use congestion_tax::calendars::{Cal, nd, TollFreeCalendar};
    /// let cal = Cal::from_ranges(&[(2013, 5, 1, 9)], &[5, 6]).unwrap();
    /// assert!(cal.is_holiday(&nd(2013, 5, 9)));
    /// assert!(!cal.is_holiday(&nd(2013, 5, 10)));
    /// ```
    pub fn from_ranges(ranges: &[(i32, u32, u32, u32)], week_mask: &[u8]) -> TaxResult<Self> {
        let mut holidays: Vec<NaiveDate> = Vec::new();
        for &(year, month, first, last) in ranges {
            if first > last {
                return Err(TaxError::InvalidCalendar(format!(
                    "holiday range {}-{:02} {}..={} is reversed.",
                    year, month, first, last
                )));
            }
            for day in first..=last {
                let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    TaxError::InvalidCalendar(format!(
                        "{}-{:02}-{:02} is not a valid date.",
                        year, month, day
                    ))
                })?;
                holidays.push(date);
            }
        }
        Cal::try_new(holidays, week_mask.to_vec())
    }

    /// Return the holidays of the calendar in the order they were supplied.
    pub fn holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holidays.iter()
    }
}

impl TollFreeCalendar for Cal {
    fn is_weekend(&self, date: &NaiveDate) -> bool {
        self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }
}
