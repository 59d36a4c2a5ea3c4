use thiserror::Error;

/// The single error kind for set validation and product generation. Every
/// variant carries enough context to name the offending set and reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSetError {
    #[error("Input cannot be empty for set {set_name}")]
    EmptyInput { set_name: String },

    #[error("Invalid element '{token}' in set {set_name}")]
    InvalidElement { token: String, set_name: String },

    #[error("Set {set_name} contains no valid elements")]
    NoValidElements { set_name: String },

    #[error("Element array cannot be empty for set {set_name}")]
    EmptyArray { set_name: String },

    #[error("Invalid range for set {set_name}: start {start} must not exceed end {end}")]
    InvalidRange {
        set_name: String,
        start: i64,
        end: i64,
    },

    #[error("Sets cannot be missing")]
    MissingSet,

    #[error("Set {set_name} cannot be empty")]
    EmptySet { set_name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, InvalidSetError>;
