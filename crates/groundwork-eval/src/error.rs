//! Evaluation core error types

use thiserror::Error;

/// Errors surfaced to graph-node evaluation logic
#[derive(Error, Debug)]
pub enum EvalError {
    /// The component factory has no constructor for the requested type.
    /// Fatal for the requesting node; never retried here.
    #[error("Unknown provider type: {0}")]
    UnknownProviderType(String),

    /// The provider declared support for types its schema does not cover.
    /// A provider-implementation defect, not a user error.
    #[error(
        "Provider {provider} returned no schema for declared types \
         (resources: {missing_resources:?}, data sources: {missing_data_sources:?})"
    )]
    SchemaMismatch {
        provider: String,
        missing_resources: Vec<String>,
        missing_data_sources: Vec<String>,
    },

    /// An operation needing a live handle ran before `init_provider`
    #[error("Provider not initialized: {0}")]
    ProviderNotInitialized(String),

    #[error("Provider error: {0}")]
    Provider(#[from] groundwork_provider::ProviderError),
}

pub type Result<T> = std::result::Result<T, EvalError>;
