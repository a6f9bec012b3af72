use crate::naming::{Category, NamingError};
use thiserror::Error;

pub type FlowResult<T> = Result<T, FlowError>;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("That answer does not fit the current question ({0})")]
    UnexpectedAnswer(&'static str),
    #[error("'{code}' is not a known {category} option")]
    UnknownOption { category: Category, code: String },
    #[error("Short code must be 1 to 3 characters, got '{0}'")]
    InvalidShortCode(String),
    #[error("A value is required")]
    EmptyValue,
    #[error("Failed to register project/app/service: {0}")]
    Registration(#[from] NamingError),
    #[error("Component collection is not finished")]
    Incomplete,
}
