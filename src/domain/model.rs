use crate::utils::error::AgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated (year, month, day) triple in the proleptic Gregorian calendar.
///
/// Construct through [`CalendarDate::new`]; the invariant is month 1-12 and
/// day 1..=days_in_month(year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

impl CalendarDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Wall-clock time of day, second resolution.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeOfDay {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
}

impl TimeOfDay {
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A calendar date plus time of day. The derived ordering (date, then time)
/// agrees with epoch-millisecond ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Instant {
    pub date: CalendarDate,
    pub time: TimeOfDay,
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

/// Calendar-accurate elapsed time between two instants.
///
/// All fields are non-negative by construction; re-summing them with real
/// month lengths reconstructs the elapsed interval exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

/// Fixed-unit countdown (days/hours/minutes mode of the decomposition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChineseSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacResult {
    pub western: WesternSign,
    pub chinese: ChineseSign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Next anniversary of the birth (month, day), with countdown and the
/// weekday it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthdayCycle {
    pub next_anniversary: CalendarDate,
    pub countdown: Countdown,
    pub weekday: Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSpecies {
    Dog,
    Cat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Small,
    Medium,
    Large,
}

/// Normalized lifestyle inputs, each expected in [0, 1]. Out-of-range values
/// are clamped at the point of use, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    pub sleep: f64,
    pub exercise: f64,
    pub diet: f64,
}

impl LifestyleProfile {
    /// Expands a single composite score into a uniform profile, for callers
    /// that only track one number.
    pub fn from_composite(score: f64) -> Self {
        Self {
            sleep: score,
            exercise: score,
            diet: score,
        }
    }
}

/// Due date and trimester boundaries per Naegele's rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pregnancy {
    pub due_date: CalendarDate,
    pub second_trimester_start: CalendarDate,
    pub third_trimester_start: CalendarDate,
}

/// Derived life-stage metrics; each is present only when its inputs were
/// supplied in [`ComputeOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LifeStageMetrics {
    pub life_expectancy_remaining: Option<f64>,
    pub biological_age_delta: Option<f64>,
    pub pet_age_equivalent: Option<f64>,
    pub pregnancy: Option<Pregnancy>,
}

/// Optional inputs for the life-stage estimator. Omitted options suppress the
/// corresponding metric rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct ComputeOptions {
    pub country: Option<String>,
    pub sex: Option<Sex>,
    pub lifestyle: Option<LifestyleProfile>,
    pub pet_species: Option<PetSpecies>,
    pub pet_size: Option<PetSize>,
    pub last_menstrual_period: Option<CalendarDate>,
}

/// Everything `compute` derives from one (birth, reference) pair.
#[derive(Debug, Clone, Serialize)]
pub struct AgeReport {
    pub breakdown: AgeBreakdown,
    pub zodiac: ZodiacResult,
    pub birthday: BirthdayCycle,
    pub life_stage: LifeStageMetrics,
}

impl FromStr for Sex {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            other => Err(AgeError::ParseError {
                field: "sex".to_string(),
                value: other.to_string(),
                reason: "expected 'M' or 'F'".to_string(),
            }),
        }
    }
}

impl FromStr for PetSpecies {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dog" => Ok(PetSpecies::Dog),
            "cat" => Ok(PetSpecies::Cat),
            other => Err(AgeError::UnknownSpecies {
                species: other.to_string(),
            }),
        }
    }
}

impl FromStr for PetSize {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(PetSize::Small),
            "medium" => Ok(PetSize::Medium),
            "large" => Ok(PetSize::Large),
            other => Err(AgeError::ParseError {
                field: "pet_size".to_string(),
                value: other.to_string(),
                reason: "expected 'small', 'medium' or 'large'".to_string(),
            }),
        }
    }
}
