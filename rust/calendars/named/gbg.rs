//! Define the Gothenburg congestion tax calendar for 2013.
//!
//! Holidays are given as `(year, month, first_day, last_day)` and include the days before public
//! holidays, on which no tax is charged, and the whole of July.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const HOLIDAYS: &[(i32, u32, u32, u32)] = &[
    (2013, 1, 1, 2),
    (2013, 3, 27, 29),
    (2013, 4, 1, 1),
    (2013, 4, 29, 30),
    (2013, 5, 1, 9),
    (2013, 6, 4, 6),
    (2013, 6, 20, 21),
    (2013, 7, 1, 31),
    (2013, 11, 1, 2),
    (2013, 12, 23, 26),
    (2013, 12, 30, 31),
];
