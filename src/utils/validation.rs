use crate::utils::error::{InvalidSetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InvalidSetError::Config {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_paired_fields<A, B>(
    first_name: &str,
    first: &Option<A>,
    second_name: &str,
    second: &Option<B>,
) -> Result<()> {
    if first.is_some() != second.is_some() {
        return Err(InvalidSetError::Config {
            message: format!("{} and {} must be provided together", first_name, second_name),
        });
    }
    Ok(())
}
