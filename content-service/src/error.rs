use crate::services::providers::ProviderError;
use service_core::error::AppError;
use thiserror::Error;

/// Message returned when neither `pais` nor `assunto` is supplied.
pub const MISSING_FIELDS_MESSAGE: &str = "O campos são obrigatórios!.";

/// Failure of a content generation request.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl ContentError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentError::MissingFields => "invalid",
            ContentError::InvalidBody(_) => "bad_body",
            ContentError::Upstream(_) => "upstream_error",
        }
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::MissingFields => AppError::BadRequest(err.to_string()),
            other => AppError::InternalError(anyhow::Error::new(other)),
        }
    }
}
