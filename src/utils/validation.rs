use crate::utils::error::{AgeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgeError::ConfigError {
            field: field_name.to_string(),
            message: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
