use chrono::{Datelike, NaiveDate};

/// Date formats accepted for move-in dates: HTML date inputs first, then US style
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Calendar arithmetic for rent proration
pub struct LeaseCalendar;

impl LeaseCalendar {
    /// Parse a date as typed into the form
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    }

    /// Number of calendar days in the month containing `date`
    pub fn days_in_month(date: NaiveDate) -> u32 {
        Self::last_day_of_month(date.year(), date.month())
            .map(|last| last.day())
            // Every month chrono can represent has a successor month except the
            // very last one, which has 31 days
            .unwrap_or(31)
    }

    /// Days the tenant occupies the unit in the move-in month, move-in day included
    pub fn remaining_days(date: NaiveDate) -> u32 {
        Self::days_in_month(date) - date.day() + 1
    }

    /// Last day of a month
    pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
        if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()
        }
    }
}
