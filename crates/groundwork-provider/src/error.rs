//! Provider boundary error types

use thiserror::Error;

/// Errors crossing the provider plugin boundary
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Unknown provider type: {0}")]
    UnknownType(String),

    #[error("Schema fetch failed: {0}")]
    SchemaFetch(String),

    #[error("Provider rejected configuration: {0}")]
    Configure(String),

    #[error("Plugin transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
