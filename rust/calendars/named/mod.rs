//! Static data for pre-existing named toll-free calendars.
//!

pub mod bus;
pub mod gbg;

use std::collections::HashMap;

use crate::calendars::Cal;
use crate::error::{TaxError, TaxResult};

type CalendarData = (&'static [u8], &'static [(i32, u32, u32, u32)]);

fn get_data_by_name(name: &str) -> TaxResult<CalendarData> {
    let hmap: HashMap<&str, CalendarData> = HashMap::from([
        ("bus", (bus::WEEKMASK, bus::HOLIDAYS)),
        ("gbg", (gbg::WEEKMASK, gbg::HOLIDAYS)),
    ]);
    hmap.get(name)
        .copied()
        .ok_or_else(|| TaxError::UnknownCalendar(name.to_string()))
}

/// Return a pre-defined [`Cal`] by its case-insensitive name.
///
/// Available calendars are `"gbg"` (Gothenburg, 2013) and `"bus"` (weekends only).
pub fn get_calendar_by_name(name: &str) -> TaxResult<Cal> {
    let (week_mask, holidays) = get_data_by_name(&name.to_lowercase())?;
    Cal::from_ranges(holidays, week_mask)
}
