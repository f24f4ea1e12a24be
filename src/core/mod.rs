pub mod birthday;
pub mod calendar;
pub mod decompose;
pub mod engine;
pub mod lifestage;
pub mod zodiac;

pub use crate::domain::model::{AgeBreakdown, AgeReport, CalendarDate, ComputeOptions, Instant};
pub use crate::domain::ports::{ActivityRecord, ActivitySink};
pub use crate::utils::error::Result;
