//! The single public contract: one call turns a (birth, reference) pair plus
//! optional life-stage inputs into a full [`AgeReport`].

use crate::core::{birthday, decompose, lifestage, zodiac};
use crate::domain::model::{
    AgeReport, CalendarDate, ComputeOptions, Instant, LifeStageMetrics, PetSize,
};
use crate::domain::ports::ActivityRecord;
use crate::utils::error::{AgeError, Result};

/// Stateless, synchronous computation engine. Every call is a pure transform
/// of its inputs; repeated or concurrent invocations share nothing.
#[derive(Debug, Default)]
pub struct AgeEngine;

impl AgeEngine {
    pub fn new() -> Self {
        Self
    }

    /// Computes the canonical breakdown and every derived fragment. Fails
    /// up front with [`AgeError::FutureBirth`] when birth is after the
    /// reference, returning no partial result.
    pub fn compute(
        &self,
        birth: &Instant,
        reference: &Instant,
        options: &ComputeOptions,
    ) -> Result<AgeReport> {
        let breakdown = decompose::breakdown(birth, reference)?;
        tracing::debug!(
            years = breakdown.years,
            months = breakdown.months,
            "decomposed age"
        );

        let zodiac = zodiac::classify(&birth.date);
        let birthday = birthday::cycle(&birth.date, reference);

        let mut life_stage = LifeStageMetrics::default();
        let age_years = lifestage::age_in_years(birth, reference);

        if let (Some(country), Some(sex)) = (options.country.as_deref(), options.sex) {
            let remaining = match lifestage::life_expectancy_remaining(country, sex, age_years) {
                Ok(value) => value,
                Err(AgeError::UnsupportedRegion { country }) => {
                    tracing::warn!(%country, "no life table for region, using global average");
                    lifestage::global_life_expectancy_remaining(sex, age_years)
                }
                Err(other) => return Err(other),
            };
            life_stage.life_expectancy_remaining = Some(remaining);
        }

        if let Some(profile) = &options.lifestyle {
            life_stage.biological_age_delta = Some(lifestage::biological_age_delta(profile));
        }

        if let Some(species) = options.pet_species {
            let size = options.pet_size.unwrap_or(PetSize::Medium);
            life_stage.pet_age_equivalent =
                Some(lifestage::pet_age_equivalent(species, size, age_years));
        }

        if let Some(lmp) = &options.last_menstrual_period {
            life_stage.pregnancy = Some(lifestage::pregnancy(lmp, &reference.date)?);
        }

        Ok(AgeReport {
            breakdown,
            zodiac,
            birthday,
            life_stage,
        })
    }

    /// Builds the payload a host hands to its activity-log collaborator
    /// after a successful computation.
    pub fn activity_record(
        &self,
        birth: &CalendarDate,
        report: &AgeReport,
        timestamp: String,
    ) -> ActivityRecord {
        ActivityRecord {
            action: "age_calculation".to_string(),
            input_date: *birth,
            output_age: report.breakdown,
            timestamp,
        }
    }
}
