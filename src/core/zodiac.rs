//! Western and Chinese zodiac classification.

use crate::domain::model::{CalendarDate, ChineseSign, WesternSign, ZodiacResult};

use crate::domain::model::ChineseSign::*;
use crate::domain::model::WesternSign::*;

/// Per calendar month: the day the later sign begins, the sign before that
/// day, and the sign from that day on. Boundary days belong to the later
/// sign (e.g. Mar 21 is already Aries).
const WESTERN_CUTOFFS: [(u32, WesternSign, WesternSign); 12] = [
    (20, Capricorn, Aquarius),
    (19, Aquarius, Pisces),
    (21, Pisces, Aries),
    (20, Aries, Taurus),
    (21, Taurus, Gemini),
    (21, Gemini, Cancer),
    (23, Cancer, Leo),
    (23, Leo, Virgo),
    (23, Virgo, Libra),
    (23, Libra, Scorpio),
    (22, Scorpio, Sagittarius),
    (22, Sagittarius, Capricorn),
];

/// Twelve-year animal cycle anchored at 4 CE, a Rat year (so 2020 is Rat and
/// 2024 is Dragon).
const CHINESE_CYCLE: [ChineseSign; 12] = [
    Rat, Ox, Tiger, Rabbit, Dragon, Snake, Horse, Goat, Monkey, Rooster, Dog, Pig,
];

/// Western sign by month-indexed dispatch over the fixed boundary table;
/// Capricorn wraps the year boundary (Dec 22 - Jan 19).
pub fn western_sign(date: &CalendarDate) -> WesternSign {
    let (cutoff, before, from) = WESTERN_CUTOFFS[date.month() as usize - 1];
    if date.day() >= cutoff {
        from
    } else {
        before
    }
}

/// Chinese sign by year modulo 12.
///
/// The lunar new year's variable start is deliberately not modeled, so
/// January/February births near the lunar boundary may be nominally one sign
/// off. This is the documented approximation, not a defect.
pub fn chinese_sign(year: i32) -> ChineseSign {
    CHINESE_CYCLE[(year - 4).rem_euclid(12) as usize]
}

pub fn classify(date: &CalendarDate) -> ZodiacResult {
    ZodiacResult {
        western: western_sign(date),
        chinese: chinese_sign(date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn western_sign_mid_range() {
        assert_eq!(western_sign(&date(2024, 3, 25)), Aries);
        assert_eq!(western_sign(&date(1990, 8, 5)), Leo);
        assert_eq!(western_sign(&date(1985, 11, 30)), Sagittarius);
    }

    #[test]
    fn western_boundary_days_go_to_the_later_sign() {
        assert_eq!(western_sign(&date(2024, 3, 21)), Aries);
        assert_eq!(western_sign(&date(2024, 3, 20)), Pisces);
        assert_eq!(western_sign(&date(2024, 1, 19)), Capricorn);
        assert_eq!(western_sign(&date(2024, 1, 20)), Aquarius);
    }

    #[test]
    fn capricorn_wraps_the_year_boundary() {
        assert_eq!(western_sign(&date(2024, 12, 22)), Capricorn);
        assert_eq!(western_sign(&date(2024, 12, 31)), Capricorn);
        assert_eq!(western_sign(&date(2025, 1, 1)), Capricorn);
        assert_eq!(western_sign(&date(2024, 12, 21)), Sagittarius);
    }

    #[test]
    fn chinese_cycle_anchors() {
        assert_eq!(chinese_sign(2020), Rat);
        assert_eq!(chinese_sign(2024), Dragon);
        assert_eq!(chinese_sign(2023), Rabbit);
        assert_eq!(chinese_sign(1900), Rat);
        // rem_euclid keeps the cycle right for the earliest supported years
        assert_eq!(chinese_sign(4), Rat);
        assert_eq!(chinese_sign(3), Pig);
    }
}
