use thiserror::Error;

#[derive(Error, Debug)]
pub enum FriesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input ended while waiting for: {prompt}")]
    InputClosed { prompt: String },
}

impl FriesError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FriesError::InputClosed { .. } => {
                "The order was cancelled before it was completed".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FriesError>;
