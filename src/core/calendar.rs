//! Calendar arithmetic primitives for the proleptic Gregorian calendar.
//!
//! Everything else in the engine sits on top of these: validity checks,
//! month-length tables, epoch-millisecond conversion for total ordering, and
//! closed-form weekday lookup (Zeller's congruence).

use crate::domain::model::{CalendarDate, Instant, TimeOfDay, Weekday};
use crate::utils::error::{AgeError, Result};

pub const MILLIS_PER_MINUTE: i64 = 60 * 1_000;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Gregorian leap-year rule: divisible by 4, except centuries, except
/// multiples of 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, February 28 or 29 per `is_leap_year`.
/// Callers pass a month already validated to 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        // should never occur for validated input; keeps the function total
        _ => 30,
    }
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AgeError::InvalidDate {
                year,
                month,
                day,
                reason: "month out of range 1-12".to_string(),
            });
        }
        let max_day = days_in_month(year, month);
        if day < 1 || day > max_day {
            return Err(AgeError::InvalidDate {
                year,
                month,
                day,
                reason: format!("day out of range 1-{} for that month", max_day),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Days since 1970-01-01 (negative before the epoch). Days-from-civil
    /// algorithm, exact over the whole proleptic range.
    pub fn to_epoch_days(&self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = if self.month > 2 {
            self.month - 3
        } else {
            self.month + 9
        };
        let doy = (153 * i64::from(mp) + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Inverse of [`to_epoch_days`](Self::to_epoch_days).
    pub fn from_epoch_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
        let year = (if month <= 2 { y + 1 } else { y }) as i32;
        Self { year, month, day }
    }

    /// Calendar walk of `n` days forward (or backward for negative `n`).
    pub fn add_days(&self, n: i64) -> Self {
        Self::from_epoch_days(self.to_epoch_days() + n)
    }

    /// Day of the week via Zeller's congruence. Exact for the proleptic
    /// Gregorian calendar, century leap-year exceptions included.
    pub fn weekday(&self) -> Weekday {
        let (mut year, mut month) = (self.year, self.month as i32);
        if month < 3 {
            month += 12;
            year -= 1;
        }
        let q = self.day as i32;
        let k = year.rem_euclid(100);
        let j = year.div_euclid(100);
        let h = (q + (13 * (month + 1)) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
        match h {
            0 => Weekday::Saturday,
            1 => Weekday::Sunday,
            2 => Weekday::Monday,
            3 => Weekday::Tuesday,
            4 => Weekday::Wednesday,
            5 => Weekday::Thursday,
            _ => Weekday::Friday,
        }
    }
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(AgeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn midnight() -> Self {
        Self::default()
    }

    fn to_millis(self) -> i64 {
        i64::from(self.hour) * MILLIS_PER_HOUR
            + i64::from(self.minute) * MILLIS_PER_MINUTE
            + i64::from(self.second) * 1_000
    }
}

impl Instant {
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    pub fn at_midnight(date: CalendarDate) -> Self {
        Self {
            date,
            time: TimeOfDay::midnight(),
        }
    }

    /// Total milliseconds since 1970-01-01T00:00:00.
    pub fn to_epoch_millis(&self) -> i64 {
        self.date.to_epoch_days() * MILLIS_PER_DAY + self.time.to_millis()
    }

    pub fn from_epoch_millis(millis: i64) -> Self {
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let mut rem = millis.rem_euclid(MILLIS_PER_DAY);
        let hour = (rem / MILLIS_PER_HOUR) as u32;
        rem %= MILLIS_PER_HOUR;
        let minute = (rem / MILLIS_PER_MINUTE) as u32;
        rem %= MILLIS_PER_MINUTE;
        let second = (rem / 1_000) as u32;
        Self {
            date: CalendarDate::from_epoch_days(days),
            time: TimeOfDay {
                hour,
                minute,
                second,
            },
        }
    }
}
