//! Canonical date formats shared by the transaction and currency modules.
//!
//! Transaction dates are full date-times with an offset and travel as
//! RFC 3339 strings. Exchange-rate effective and record dates are calendar
//! dates with no time component and travel as `YYYY-MM-DD` strings. The two
//! formats are never interchangeable.

use time::{
    Date, Month, OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// The calendar-date format used for exchange-rate effective and record
/// dates.
const CALENDAR_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Format a transaction date for the wire and for persistence.
pub fn format_transaction_date(date: OffsetDateTime) -> String {
    date.format(&Rfc3339)
        .expect("transaction date outside the RFC 3339 representable range")
}

/// Parse a transaction date from its RFC 3339 wire representation.
pub fn parse_transaction_date(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(text, &Rfc3339)
}

/// Parse an exchange-rate date in the `YYYY-MM-DD` calendar format.
pub fn parse_calendar_date(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(text, CALENDAR_DATE_FORMAT)
}

/// Add whole calendar months to a date, clamping the day to the length of
/// the target month (for example Aug 31 + 6 months = Feb 28).
///
/// Returns `None` when the result would fall outside the range `Date`
/// supports.
pub fn add_calendar_months(date: Date, months: u32) -> Option<Date> {
    let zero_based_month = date.month() as u32 - 1 + months;
    let year = date.year().checked_add((zero_based_month / 12) as i32)?;
    let month = Month::try_from((zero_based_month % 12 + 1) as u8).ok()?;
    let day = date.day().min(month.length(year));

    Date::from_calendar_date(year, month, day).ok()
}
