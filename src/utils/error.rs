use crate::core::validate::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradingError {
    #[error("Unknown grading company: {0}")]
    UnknownCompany(String),

    #[error("Unknown service level '{level}' for company {company}")]
    UnknownServiceLevel { company: String, level: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Submission contains no cards")]
    EmptyBatch,

    #[error("Catalog is malformed: {message}")]
    InvalidState { message: String },

    #[error("Submission failed validation with {} error(s)", .errors.len())]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("External service error: {message}")]
    ExternalError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, GradingError>;
