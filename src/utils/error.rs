use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgeError {
    #[error("Invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: String,
    },

    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("Birth instant {birth} is after the reference instant {reference}")]
    FutureBirth { birth: String, reference: String },

    #[error("No life-expectancy table for region '{country}'")]
    UnsupportedRegion { country: String },

    #[error("Unknown pet species '{species}'")]
    UnknownSpecies { species: String },

    #[error("Last menstrual period {lmp} is after the reference date {reference}")]
    InvalidGestationDate { lmp: String, reference: String },

    #[error("Failed to parse {field}: '{value}' ({reason})")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Profile parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AgeError {
    /// Short hint the CLI prints next to a failure.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AgeError::InvalidDate { .. } | AgeError::InvalidTime { .. } => {
                "Check the calendar date; months run 1-12 and days must exist in that month"
            }
            AgeError::FutureBirth { .. } => {
                "The birth date must not be later than the reference date"
            }
            AgeError::UnsupportedRegion { .. } => {
                "Use an ISO country code covered by the actuarial table, or omit the country"
            }
            AgeError::UnknownSpecies { .. } => "Supported pet species are 'dog' and 'cat'",
            AgeError::InvalidGestationDate { .. } => {
                "The last menstrual period must not be in the future"
            }
            AgeError::ParseError { .. } => {
                "Dates are written as YYYY-MM-DD, optionally followed by THH:MM or THH:MM:SS"
            }
            AgeError::ConfigError { .. } => "Fix the profile file and retry",
            AgeError::IoError(_) => "Check that the profile path exists and is readable",
            AgeError::SerializationError(_) => "Re-run with --verbose and report the failure",
            AgeError::TomlError(_) => "The profile file is not valid TOML",
        }
    }
}

pub type Result<T> = std::result::Result<T, AgeError>;
