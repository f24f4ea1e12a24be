//! Next-anniversary prediction, countdown, and weekday lookup.

use crate::core::calendar::days_in_month;
use crate::core::decompose;
use crate::domain::model::{BirthdayCycle, CalendarDate, Instant, Weekday};

/// The anniversary of `birth` in `year`.
///
/// Policy: Feb 29 births observe Feb 28 in non-leap years (rather than
/// Mar 1), so the anniversary always stays inside the birth month.
pub(crate) fn anniversary_in_year(birth: &CalendarDate, year: i32) -> CalendarDate {
    CalendarDate {
        year,
        month: birth.month,
        day: birth.day.min(days_in_month(year, birth.month)),
    }
}

/// First anniversary strictly after the reference instant. An anniversary on
/// the reference day itself counts as passed, so the countdown is always
/// strictly positive.
pub fn next_anniversary(birth: &CalendarDate, reference: &Instant) -> CalendarDate {
    let candidate = anniversary_in_year(birth, reference.date.year());
    if Instant::at_midnight(candidate) <= *reference {
        anniversary_in_year(birth, reference.date.year() + 1)
    } else {
        candidate
    }
}

/// Weekday of the anniversary falling in `year`, by closed-form lookup.
pub fn anniversary_weekday(birth: &CalendarDate, year: i32) -> Weekday {
    anniversary_in_year(birth, year).weekday()
}

pub fn cycle(birth: &CalendarDate, reference: &Instant) -> BirthdayCycle {
    let next = next_anniversary(birth, reference);
    BirthdayCycle {
        next_anniversary: next,
        countdown: decompose::countdown(reference, &Instant::at_midnight(next)),
        weekday: next.weekday(),
    }
}
