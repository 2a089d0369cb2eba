use chrono::prelude::*;

/// Simple date classification defining weekends, holidays and toll-free dates.
pub trait TollFreeCalendar {
    /// Returns whether the date falls on a weekend day.
    fn is_weekend(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday outside of the weekend rule.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether no congestion tax is charged on the date, i.e. either a weekend or a holiday.
    fn is_toll_free_date(&self, date: &NaiveDate) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }

    /// Returns whether congestion tax may be charged on the date.
    fn is_chargeable_date(&self, date: &NaiveDate) -> bool {
        !self.is_toll_free_date(date)
    }
}
