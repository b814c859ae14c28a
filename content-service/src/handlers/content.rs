use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

use crate::error::ContentError;
use crate::models::{ContentRequest, GeneratedContent};
use crate::services::metrics::record_request;
use crate::startup::AppState;

/// `POST /conteudo`: returns the HTML fragment as the raw response body.
///
/// Body parse failures are reported like any other internal failure (500),
/// only the empty-request case is a 400.
#[tracing::instrument(skip(state, payload))]
pub async fn generate_content(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<GeneratedContent, AppError> {
    let outcome = match payload {
        Ok(Json(body)) => match ContentRequest::from_json(body) {
            Ok(request) => state.content.generate(&request).await,
            Err(e) => Err(e),
        },
        Err(rejection) => Err(ContentError::InvalidBody(rejection.body_text())),
    };

    record_request(&outcome);

    match outcome {
        Ok(content) => Ok(content),
        Err(ContentError::MissingFields) => Err(ContentError::MissingFields.into()),
        Err(e) => {
            tracing::error!(error = %e, "Internal error while generating content");
            Err(e.into())
        }
    }
}
