//! Chronological decomposition: calendar-accurate years/months/weeks/days
//! plus hours and minutes between two instants.
//!
//! Months and years are tied to real calendar boundaries, never to fixed
//! 30-day units: the month count is the largest number of whole calendar
//! months that fits between the instants (with end-of-month clamping, so a
//! Jan 31 birth reaches its first month anniversary on the last day of
//! February), and the remaining days are whatever the calendar walk leaves
//! over. Re-summing the fields along the calendar therefore reconstructs the
//! elapsed interval exactly.

use crate::core::calendar::days_in_month;
use crate::domain::model::{AgeBreakdown, CalendarDate, Countdown, Instant};
use crate::utils::error::{AgeError, Result};

/// Advances a date by whole months, clamping the day to the target month's
/// length (Jan 31 + 1 month = Feb 28/29).
pub(crate) fn add_months_clamped(date: CalendarDate, months: i64) -> CalendarDate {
    let zero_based = i64::from(date.year) * 12 + i64::from(date.month) - 1 + months;
    let year = zero_based.div_euclid(12) as i32;
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    let day = date.day.min(days_in_month(year, month));
    CalendarDate { year, month, day }
}

/// Breaks the interval from `birth` to `reference` into the canonical
/// {years, months, weeks, days, hours, minutes} form.
///
/// Seconds take part in the borrowing chain but the result is reported down
/// to minutes. Fails with [`AgeError::FutureBirth`] when `birth` is strictly
/// after `reference`.
pub fn breakdown(birth: &Instant, reference: &Instant) -> Result<AgeBreakdown> {
    if birth > reference {
        return Err(AgeError::FutureBirth {
            birth: birth.to_string(),
            reference: reference.to_string(),
        });
    }

    // Time-of-day borrowing: seconds from minutes, minutes from hours, hours
    // from the reference day.
    let mut minute = i64::from(reference.time.minute) - i64::from(birth.time.minute);
    let mut hour = i64::from(reference.time.hour) - i64::from(birth.time.hour);
    if reference.time.second < birth.time.second {
        minute -= 1;
    }
    if minute < 0 {
        minute += 60;
        hour -= 1;
    }
    let mut ref_date = reference.date;
    if hour < 0 {
        hour += 24;
        ref_date = ref_date.add_days(-1);
    }

    // Largest whole-month span that fits, with end-of-month clamping.
    let mut total_months = (i64::from(ref_date.year) - i64::from(birth.date.year)) * 12
        + i64::from(ref_date.month)
        - i64::from(birth.date.month);
    let clamped_birth_day = birth.date.day.min(days_in_month(ref_date.year, ref_date.month));
    if ref_date.day < clamped_birth_day {
        total_months -= 1;
    }

    let anchor = add_months_clamped(birth.date, total_months);
    let day_span = ref_date.to_epoch_days() - anchor.to_epoch_days();

    Ok(AgeBreakdown {
        years: (total_months / 12) as u32,
        months: (total_months % 12) as u32,
        weeks: (day_span / 7) as u32,
        days: (day_span % 7) as u32,
        hours: hour as u32,
        minutes: minute as u32,
    })
}

/// Fixed-unit days/hours/minutes between two ordered instants, used for
/// countdowns where calendar months are meaningless.
pub fn countdown(from: &Instant, to: &Instant) -> Countdown {
    let span = (to.to_epoch_millis() - from.to_epoch_millis()).max(0);
    let minutes_total = span / (60 * 1_000);
    Countdown {
        days: (minutes_total / (24 * 60)) as u32,
        hours: (minutes_total / 60 % 24) as u32,
        minutes: (minutes_total % 60) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TimeOfDay;

    fn midnight(y: i32, m: u32, d: u32) -> Instant {
        Instant::at_midnight(CalendarDate::new(y, m, d).unwrap())
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Instant {
        Instant::new(
            CalendarDate::new(y, m, d).unwrap(),
            TimeOfDay::new(h, min, 0).unwrap(),
        )
    }

    #[test]
    fn exact_thirty_years() {
        let b = breakdown(&midnight(1990, 2, 15), &midnight(2020, 2, 15)).unwrap();
        assert_eq!(
            b,
            AgeBreakdown {
                years: 30,
                months: 0,
                weeks: 0,
                days: 0,
                hours: 0,
                minutes: 0,
            }
        );
    }

    #[test]
    fn month_boundary_borrowing_jan31_to_mar1() {
        let b = breakdown(&midnight(2024, 1, 31), &midnight(2024, 3, 1)).unwrap();
        assert_eq!(b.years, 0);
        assert_eq!(b.months, 1);
        assert_eq!(b.weeks, 0);
        assert_eq!(b.days, 1);
    }

    #[test]
    fn future_birth_is_rejected() {
        let err = breakdown(&midnight(2024, 3, 1), &midnight(2024, 1, 31)).unwrap_err();
        assert!(matches!(err, AgeError::FutureBirth { .. }));

        // One minute into the future counts too.
        let err = breakdown(&at(2024, 3, 1, 0, 1), &midnight(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, AgeError::FutureBirth { .. }));
    }

    #[test]
    fn time_of_day_borrowing_crosses_midnight() {
        let b = breakdown(&at(2024, 2, 29, 23, 30), &at(2024, 3, 1, 0, 15)).unwrap();
        assert_eq!(
            b,
            AgeBreakdown {
                years: 0,
                months: 0,
                weeks: 0,
                days: 0,
                hours: 0,
                minutes: 45,
            }
        );
    }

    #[test]
    fn day_remainder_splits_into_weeks_and_days() {
        let b = breakdown(&midnight(2024, 1, 1), &midnight(2024, 1, 18)).unwrap();
        assert_eq!(b.weeks, 2);
        assert_eq!(b.days, 3);
    }

    #[test]
    fn resumming_reconstructs_the_reference_date() {
        let cases = [
            (midnight(1990, 2, 15), midnight(2020, 2, 15)),
            (midnight(2024, 1, 31), midnight(2024, 3, 1)),
            (midnight(2024, 1, 30), midnight(2024, 3, 1)),
            (midnight(2000, 2, 29), midnight(2023, 2, 28)),
            (midnight(1999, 12, 31), midnight(2024, 7, 4)),
        ];
        for (birth, reference) in cases {
            let b = breakdown(&birth, &reference).unwrap();
            let months = i64::from(b.years) * 12 + i64::from(b.months);
            let rebuilt = add_months_clamped(birth.date, months)
                .add_days(i64::from(b.weeks) * 7 + i64::from(b.days));
            assert_eq!(rebuilt, reference.date, "case {birth} -> {reference}");
        }
    }

    #[test]
    fn countdown_is_fixed_unit() {
        let c = countdown(&at(2024, 3, 1, 12, 30), &at(2024, 3, 4, 14, 45));
        assert_eq!(c.days, 3);
        assert_eq!(c.hours, 2);
        assert_eq!(c.minutes, 15);

        let zero = countdown(&midnight(2024, 3, 1), &midnight(2024, 3, 1));
        assert_eq!((zero.days, zero.hours, zero.minutes), (0, 0, 0));
    }
}
