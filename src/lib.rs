pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LifeStageProfile;

pub use core::engine::AgeEngine;
pub use domain::model::{
    AgeBreakdown, AgeReport, BirthdayCycle, CalendarDate, ChineseSign, ComputeOptions, Countdown,
    Instant, LifeStageMetrics, LifestyleProfile, PetSize, PetSpecies, Pregnancy, Sex, TimeOfDay,
    Weekday, WesternSign, ZodiacResult,
};
pub use domain::ports::{ActivityRecord, ActivitySink};
pub use utils::error::{AgeError, Result};
