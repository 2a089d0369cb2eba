//! Define a generic Western weekend calendar without any specific holidays.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const HOLIDAYS: &[(i32, u32, u32, u32)] = &[]; // no specific holidays
