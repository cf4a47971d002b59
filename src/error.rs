use thiserror::Error;

#[derive(Error, Debug)]
pub enum GazeKitError {
    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GkResult<T> = Result<T, GazeKitError>;
