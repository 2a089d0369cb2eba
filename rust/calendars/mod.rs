//! Determine which dates are free of congestion tax.
//!
//! A toll-free date is either part of the weekend or a specific public holiday. Both are
//! captured by a [`Cal`], which implements the [`TollFreeCalendar`] trait. Holiday data is only
//! modelled for the years it is supplied for: a date in any other year is toll-free only when it
//! falls on the weekend.
//!
//! ### Example
//! This example loads the pre-defined Gothenburg calendar and inspects the days around
//! Midsummer 2013.
//! ```rust
//! # use congestion_tax::calendars::{get_calendar_by_name, nd, TollFreeCalendar};
//! let cal = get_calendar_by_name("gbg").unwrap();
//! assert!(cal.is_toll_free_date(&nd(2013, 6, 21)));  // Midsummer Eve, a Friday
//! assert!(cal.is_toll_free_date(&nd(2013, 6, 22)));  // Saturday
//! assert!(!cal.is_toll_free_date(&nd(2013, 6, 24))); // Monday
//! ```

mod cal;
mod named;
mod toll_free;

pub use crate::calendars::{
    cal::{nd, ndt, Cal},
    named::get_calendar_by_name,
    toll_free::TollFreeCalendar,
};
