use thiserror::Error;

/// Failures reported by the data layer
///
/// Every variant is a recoverable, caller-facing condition. The HTTP layer maps
/// them to 400/409/404/403 respectively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not authorized: {0}")]
    Authorization(String),
}

impl CoreError {
    pub fn missing_field(field: &str) -> Self {
        CoreError::Validation(format!("{} is required", field))
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort_unstable();
        CoreError::Validation(format!("invalid or missing fields: {}", fields.join(", ")))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
