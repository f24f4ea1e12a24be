//! Life-stage estimates: remaining life expectancy, biological-age shift,
//! pet-age conversion and pregnancy due date.
//!
//! Every figure here is an estimate for display, not a medical or actuarial
//! guarantee. The lookup tables are process-wide read-only constants.

use crate::core::calendar::MILLIS_PER_DAY;
use crate::domain::model::{
    CalendarDate, Instant, LifestyleProfile, PetSize, PetSpecies, Pregnancy, Sex,
};
use crate::utils::error::{AgeError, Result};

const DAYS_PER_YEAR: f64 = 365.2425;

/// Ages at which the life tables are tabulated; lookups interpolate linearly
/// between neighbours and clamp at both ends.
const TABLE_AGES: [f64; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

struct LifeTable {
    country: &'static str,
    male: [f64; 5],
    female: [f64; 5],
}

/// Remaining life expectancy in years at the tabulated ages, per region and
/// sex. Values are rounded period estimates in the spirit of the WHO life
/// tables.
const LIFE_TABLES: &[LifeTable] = &[
    LifeTable {
        country: "US",
        male: [74.8, 55.7, 37.1, 20.6, 8.1],
        female: [80.2, 60.8, 41.5, 23.8, 9.5],
    },
    LifeTable {
        country: "GB",
        male: [79.0, 59.6, 40.4, 22.5, 8.7],
        female: [82.9, 63.4, 43.9, 25.3, 10.0],
    },
    LifeTable {
        country: "JP",
        male: [81.5, 61.9, 42.6, 24.0, 9.4],
        female: [87.6, 67.9, 48.4, 29.0, 12.0],
    },
    LifeTable {
        country: "DE",
        male: [78.5, 59.1, 39.9, 22.0, 8.4],
        female: [83.4, 63.8, 44.3, 25.5, 10.0],
    },
    LifeTable {
        country: "BR",
        male: [72.8, 54.6, 36.6, 20.5, 8.2],
        female: [79.9, 61.2, 42.3, 24.6, 9.9],
    },
    LifeTable {
        country: "IN",
        male: [69.5, 52.4, 34.5, 18.3, 7.0],
        female: [72.2, 55.2, 37.0, 20.1, 7.8],
    },
];

/// World-average fallback used by the engine when a region is not tabulated.
static GLOBAL_TABLE: LifeTable = LifeTable {
    country: "GLOBAL",
    male: [70.8, 53.1, 35.2, 19.2, 7.5],
    female: [75.9, 57.7, 39.0, 21.9, 8.7],
};

fn interpolate(curve: &[f64; 5], age: f64) -> f64 {
    let age = age.clamp(TABLE_AGES[0], TABLE_AGES[TABLE_AGES.len() - 1]);
    for window in 0..TABLE_AGES.len() - 1 {
        let (lo, hi) = (TABLE_AGES[window], TABLE_AGES[window + 1]);
        if age <= hi {
            let t = (age - lo) / (hi - lo);
            return curve[window] + t * (curve[window + 1] - curve[window]);
        }
    }
    curve[TABLE_AGES.len() - 1]
}

fn curve_for(table: &'static LifeTable, sex: Sex) -> &'static [f64; 5] {
    match sex {
        Sex::Male => &table.male,
        Sex::Female => &table.female,
    }
}

/// Remaining life expectancy at `age_years` for the given region and sex.
/// Strict lookup: unknown regions error with [`AgeError::UnsupportedRegion`];
/// the engine layers the global-average fallback on top.
pub fn life_expectancy_remaining(country: &str, sex: Sex, age_years: f64) -> Result<f64> {
    let table = LIFE_TABLES
        .iter()
        .find(|t| t.country.eq_ignore_ascii_case(country))
        .ok_or_else(|| AgeError::UnsupportedRegion {
            country: country.to_string(),
        })?;
    Ok(interpolate(curve_for(table, sex), age_years))
}

/// Remaining life expectancy against the world-average table.
pub fn global_life_expectancy_remaining(sex: Sex, age_years: f64) -> f64 {
    interpolate(curve_for(&GLOBAL_TABLE, sex), age_years)
}

/// Relative weights of the lifestyle inputs and the largest shift (in years,
/// each direction) the whole profile can produce.
const LIFESTYLE_WEIGHTS: [f64; 3] = [0.35, 0.40, 0.25];
const MAX_SHIFT_YEARS: f64 = 5.0;

/// Signed adjustment to chronological age from the lifestyle profile.
///
/// Each input is clamped into [0, 1] (never rejected); 0.5 is neutral, 1.0
/// pushes the biological age younger, 0.0 older. The total is bounded by
/// ±`MAX_SHIFT_YEARS`.
pub fn biological_age_delta(profile: &LifestyleProfile) -> f64 {
    let scores = [profile.sleep, profile.exercise, profile.diet];
    scores
        .iter()
        .zip(LIFESTYLE_WEIGHTS)
        .map(|(score, weight)| weight * (0.5 - score.clamp(0.0, 1.0)) * 2.0 * MAX_SHIFT_YEARS)
        .sum()
}

/// Human-year equivalent of a pet's age.
///
/// Dogs: 15 human years for the first year, 9 for the second, then a
/// size-dependent rate per further year. Cats: the same 15/9 opening, then a
/// flat 4 per year; size is ignored.
pub fn pet_age_equivalent(species: PetSpecies, size: PetSize, age_years: f64) -> f64 {
    let age = age_years.max(0.0);
    let mature_rate = match species {
        PetSpecies::Dog => match size {
            PetSize::Small => 4.0,
            PetSize::Medium => 5.0,
            PetSize::Large => 6.0,
        },
        PetSpecies::Cat => 4.0,
    };
    if age <= 1.0 {
        age * 15.0
    } else if age <= 2.0 {
        15.0 + (age - 1.0) * 9.0
    } else {
        24.0 + (age - 2.0) * mature_rate
    }
}

/// Naegele's rule: due date 280 days after the last menstrual period, with
/// trimester boundaries at +91 and +189 days (13 and 27 weeks).
pub fn pregnancy(lmp: &CalendarDate, reference: &CalendarDate) -> Result<Pregnancy> {
    if lmp > reference {
        return Err(AgeError::InvalidGestationDate {
            lmp: lmp.to_string(),
            reference: reference.to_string(),
        });
    }
    Ok(Pregnancy {
        due_date: lmp.add_days(280),
        second_trimester_start: lmp.add_days(91),
        third_trimester_start: lmp.add_days(189),
    })
}

/// Chronological age in fractional years, for the actuarial and pet curves.
pub fn age_in_years(birth: &Instant, reference: &Instant) -> f64 {
    let millis = (reference.to_epoch_millis() - birth.to_epoch_millis()).max(0);
    millis as f64 / (DAYS_PER_YEAR * MILLIS_PER_DAY as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn expectancy_at_tabulated_ages() {
        assert_eq!(
            life_expectancy_remaining("US", Sex::Male, 0.0).unwrap(),
            74.8
        );
        assert_eq!(
            life_expectancy_remaining("jp", Sex::Female, 60.0).unwrap(),
            29.0
        );
    }

    #[test]
    fn expectancy_interpolates_between_rows() {
        // Halfway between the 20 and 40 rows for US males: (55.7 + 37.1) / 2.
        let mid = life_expectancy_remaining("US", Sex::Male, 30.0).unwrap();
        assert!((mid - 46.4).abs() < 1e-9);
    }

    #[test]
    fn expectancy_clamps_outside_the_table() {
        let at_80 = life_expectancy_remaining("US", Sex::Female, 80.0).unwrap();
        let at_95 = life_expectancy_remaining("US", Sex::Female, 95.0).unwrap();
        assert_eq!(at_80, at_95);
        assert!(at_95 > 0.0);
    }

    #[test]
    fn unknown_region_is_a_strict_error() {
        let err = life_expectancy_remaining("XX", Sex::Male, 30.0).unwrap_err();
        assert!(matches!(err, AgeError::UnsupportedRegion { .. }));
        // The fallback table is always available.
        assert!(global_life_expectancy_remaining(Sex::Male, 30.0) > 0.0);
    }

    #[test]
    fn neutral_lifestyle_leaves_age_unchanged() {
        let delta = biological_age_delta(&LifestyleProfile::from_composite(0.5));
        assert!(delta.abs() < 1e-9);
    }

    #[test]
    fn lifestyle_extremes_are_bounded_and_clamped() {
        let best = biological_age_delta(&LifestyleProfile::from_composite(1.0));
        let worst = biological_age_delta(&LifestyleProfile::from_composite(0.0));
        assert!((best + MAX_SHIFT_YEARS).abs() < 1e-9);
        assert!((worst - MAX_SHIFT_YEARS).abs() < 1e-9);

        // Out-of-range inputs clamp instead of erroring.
        let clamped = biological_age_delta(&LifestyleProfile {
            sleep: 7.0,
            exercise: -3.0,
            diet: 1.5,
        });
        let expected = biological_age_delta(&LifestyleProfile {
            sleep: 1.0,
            exercise: 0.0,
            diet: 1.0,
        });
        assert!((clamped - expected).abs() < 1e-9);
    }

    #[test]
    fn dog_years_weight_the_first_two_years() {
        assert_eq!(
            pet_age_equivalent(PetSpecies::Dog, PetSize::Medium, 1.0),
            15.0
        );
        assert_eq!(
            pet_age_equivalent(PetSpecies::Dog, PetSize::Medium, 2.0),
            24.0
        );
        assert_eq!(
            pet_age_equivalent(PetSpecies::Dog, PetSize::Large, 5.0),
            42.0
        );
        assert_eq!(
            pet_age_equivalent(PetSpecies::Dog, PetSize::Small, 5.0),
            36.0
        );
        // Fractional first year prorates.
        assert_eq!(
            pet_age_equivalent(PetSpecies::Dog, PetSize::Small, 0.5),
            7.5
        );
    }

    #[test]
    fn cat_years_ignore_size() {
        let small = pet_age_equivalent(PetSpecies::Cat, PetSize::Small, 10.0);
        let large = pet_age_equivalent(PetSpecies::Cat, PetSize::Large, 10.0);
        assert_eq!(small, large);
        assert_eq!(small, 56.0);
    }

    #[test]
    fn naegele_rule_due_date_and_trimesters() {
        let p = pregnancy(&date(2024, 1, 1), &date(2024, 2, 15)).unwrap();
        assert_eq!(p.due_date, date(2024, 10, 7));
        assert_eq!(p.second_trimester_start, date(2024, 4, 1));
        assert_eq!(p.third_trimester_start, date(2024, 7, 8));
    }

    #[test]
    fn future_lmp_is_rejected() {
        let err = pregnancy(&date(2024, 6, 1), &date(2024, 2, 15)).unwrap_err();
        assert!(matches!(err, AgeError::InvalidGestationDate { .. }));
    }

    #[test]
    fn fractional_age_tracks_the_calendar() {
        let birth = Instant::at_midnight(date(1990, 2, 15));
        let reference = Instant::at_midnight(date(2020, 2, 15));
        let age = age_in_years(&birth, &reference);
        assert!((age - 30.0).abs() < 0.01);
    }
}
