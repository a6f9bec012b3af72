use std::{fmt, io};
use thiserror::Error;

pub type ResultAzCli<T> = Result<T, ErrorAzCli>;

#[derive(Debug, Error)]
pub enum ErrorAzCli {
    #[error("Azure CLI (az) executable not found. Install Azure CLI to continue.")]
    AzNotInstalled,
    #[error("Azure CLI returned that you are not logged in. Run `az login`.")]
    NotLoggedIn,
    #[error("Azure CLI command failed with code {code:?}: {stderr}")]
    CommandFailure { code: Option<i32>, stderr: String },
    #[error("Failed to parse Azure CLI response: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Failed to execute Azure CLI: {0}")]
    Io(#[from] io::Error),
}

impl ErrorAzCli {
    pub fn is_not_found(&self) -> bool {
        match self {
            ErrorAzCli::CommandFailure { stderr, .. } => {
                stderr.contains("ResourceNotFound") || stderr.contains("could not be found")
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStep {
    SelectSource,
    ReadSource,
    SelectTarget,
    CreateTarget,
}

impl fmt::Display for MoveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            MoveStep::SelectSource => "switch to the source subscription",
            MoveStep::ReadSource => "read the source function app",
            MoveStep::SelectTarget => "switch to the target subscription",
            MoveStep::CreateTarget => "create the function app in the target subscription",
        };
        f.write_str(step)
    }
}

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("Function app '{0}' not found in source subscription")]
    SourceNotFound(String),
    #[error("Failed to {step}: {source}")]
    Step {
        step: MoveStep,
        #[source]
        source: ErrorAzCli,
    },
    #[error("Function app '{0}' was not created in target subscription")]
    NotCreated(String),
}
