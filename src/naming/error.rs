use thiserror::Error;

pub type NamingResult<T> = Result<T, NamingError>;

#[derive(Debug, Error)]
pub enum NamingError {
    #[error("Missing credential: set {0} in the environment or settings file")]
    MissingCredential(&'static str),
    #[error("Token request rejected: {error}: {description}")]
    Token { error: String, description: String },
    #[error("Naming service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Resource type with short name '{0}' not found")]
    UnknownResourceType(String),
    #[error("Failed to reach naming service: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse naming service response: {0}")]
    Decode(#[from] serde_json::Error),
}
