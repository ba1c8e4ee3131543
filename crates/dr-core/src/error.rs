use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrError {
    #[error("Invalid header pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("Header pattern has no title capture group: {pattern}")]
    MissingTitleGroup { pattern: String },
    #[error("Header template {rendered:?} is not matched by the header pattern")]
    HeaderTemplateMismatch { rendered: String },
    #[error("Keep ratio for {tier} must be in (0, 1], got {value}")]
    InvalidRatio { tier: String, value: f64 },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrError>;
