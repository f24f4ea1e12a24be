//! Text input parsing for the CLI and profile layers. The engine itself only
//! ever sees validated [`CalendarDate`]/[`Instant`] values.

use crate::domain::model::{CalendarDate, Instant, TimeOfDay};
use crate::utils::error::{AgeError, Result};
use regex::Regex;
use std::sync::OnceLock;

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,4})-(\d{2})-(\d{2})$").unwrap())
}

fn instant_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2}))?)?$").unwrap()
    })
}

fn parse_error(field: &str, value: &str) -> AgeError {
    AgeError::ParseError {
        field: field.to_string(),
        value: value.to_string(),
        reason: "expected YYYY-MM-DD, optionally followed by THH:MM[:SS]".to_string(),
    }
}

/// Parses a bare `YYYY-MM-DD` date through the validating constructor, so a
/// well-formed but calendar-impossible input surfaces as `InvalidDate`.
pub fn parse_date(field: &str, value: &str) -> Result<CalendarDate> {
    let caps = date_pattern()
        .captures(value.trim())
        .ok_or_else(|| parse_error(field, value))?;
    CalendarDate::new(
        caps[1].parse().unwrap(),
        caps[2].parse().unwrap(),
        caps[3].parse().unwrap(),
    )
}

/// Parses `YYYY-MM-DD[THH:MM[:SS]]`; a missing time part means midnight.
pub fn parse_instant(field: &str, value: &str) -> Result<Instant> {
    let caps = instant_pattern()
        .captures(value.trim())
        .ok_or_else(|| parse_error(field, value))?;
    let date = CalendarDate::new(
        caps[1].parse().unwrap(),
        caps[2].parse().unwrap(),
        caps[3].parse().unwrap(),
    )?;
    let time = match caps.get(4) {
        Some(hour) => TimeOfDay::new(
            hour.as_str().parse().unwrap(),
            caps[5].parse().unwrap(),
            caps.get(6).map_or(0, |s| s.as_str().parse().unwrap()),
        )?,
        None => TimeOfDay::midnight(),
    };
    Ok(Instant::new(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_dates() {
        let d = parse_date("birth", "1990-02-15").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1990, 2, 15));
    }

    #[test]
    fn parses_instants_with_and_without_time() {
        let i = parse_instant("birth", "1990-02-15").unwrap();
        assert_eq!(i.time, TimeOfDay::midnight());

        let i = parse_instant("birth", "1990-02-15T08:45").unwrap();
        assert_eq!((i.time.hour(), i.time.minute(), i.time.second()), (8, 45, 0));

        let i = parse_instant("birth", "1990-02-15 08:45:30").unwrap();
        assert_eq!(i.time.second(), 30);
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        for bad in ["15/02/1990", "1990-2-15", "not a date", "1990-02-15T8:45"] {
            let err = parse_instant("birth", bad).unwrap_err();
            assert!(matches!(err, AgeError::ParseError { .. }), "input {bad}");
        }
    }

    #[test]
    fn impossible_dates_surface_as_invalid_date() {
        let err = parse_date("birth", "2023-02-29").unwrap_err();
        assert!(matches!(err, AgeError::InvalidDate { .. }));

        let err = parse_instant("birth", "2024-02-29T24:00").unwrap_err();
        assert!(matches!(err, AgeError::InvalidTime { .. }));
    }
}
