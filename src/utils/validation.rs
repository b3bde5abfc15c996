use crate::domain::model::Parcel;
use crate::utils::error::{RegistryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Supported values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_measure(field_name: &str, id: i32, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RegistryError::ValidationError {
            message: format!(
                "parcel {} has {} = {}, expected a finite non-negative number",
                id, field_name, value
            ),
        });
    }
    Ok(())
}

impl Validate for Parcel {
    fn validate(&self) -> Result<()> {
        validate_measure("weight", self.id(), self.weight())?;
        validate_measure("cost", self.id(), self.cost())
    }
}
