//! TOML profile carrying the optional life-stage inputs (region, lifestyle,
//! pet, pregnancy). Everything in here is optional; an empty file is a valid
//! profile that simply suppresses every life-stage metric.

use crate::domain::model::{ComputeOptions, LifestyleProfile, PetSize, PetSpecies, Sex};
use crate::utils::error::{AgeError, Result};
use crate::utils::parse;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifeStageProfile {
    pub country: Option<String>,
    pub sex: Option<Sex>,
    pub lifestyle: Option<LifestyleProfile>,
    pub pet: Option<PetProfile>,
    pub pregnancy: Option<PregnancyProfile>,
}

/// Species and size are kept as text in the file and parsed through the
/// strict `FromStr` impls, so an unsupported species surfaces as
/// `UnknownSpecies` rather than a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetProfile {
    pub species: String,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PregnancyProfile {
    pub last_menstrual_period: String,
}

impl LifeStageProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: Self = toml::from_str(content)?;
        Ok(profile)
    }

    /// Translates the profile into engine options, parsing the textual
    /// fields strictly.
    pub fn to_compute_options(&self) -> Result<ComputeOptions> {
        let mut options = ComputeOptions {
            country: self.country.clone(),
            sex: self.sex,
            lifestyle: self.lifestyle,
            ..Default::default()
        };
        if let Some(pet) = &self.pet {
            options.pet_species = Some(pet.species.parse::<PetSpecies>()?);
            options.pet_size = match &pet.size {
                Some(size) => Some(size.parse::<PetSize>()?),
                None => None,
            };
        }
        if let Some(pregnancy) = &self.pregnancy {
            options.last_menstrual_period = Some(parse::parse_date(
                "pregnancy.last_menstrual_period",
                &pregnancy.last_menstrual_period,
            )?);
        }
        Ok(options)
    }
}

impl Validate for LifeStageProfile {
    fn validate(&self) -> Result<()> {
        if let Some(country) = &self.country {
            validate_non_empty_string("country", country)?;
        }
        // Parsing the textual fields is the validation.
        self.to_compute_options().map(|_| ())
    }
}
