use crate::error::ContentError;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

/// Body of `POST /conteudo`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentRequest {
    #[serde(rename = "pais", default)]
    pub country: Option<String>,
    #[serde(rename = "assunto", default)]
    pub topic: Option<String>,
}

impl ContentRequest {
    pub fn new(country: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            topic: Some(topic.into()),
        }
    }

    /// Parse a request body. Only a JSON object is accepted; arrays and
    /// scalars are rejected instead of being read positionally.
    pub fn from_json(body: serde_json::Value) -> Result<Self, ContentError> {
        if !body.is_object() {
            return Err(ContentError::InvalidBody(format!(
                "request body must be a JSON object, got {}",
                json_kind(&body)
            )));
        }
        serde_json::from_value(body).map_err(|e| ContentError::InvalidBody(e.to_string()))
    }

    /// Country, empty when absent.
    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }

    /// Topic, empty when absent.
    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or_default()
    }

    /// Rejects the request only when both fields are absent or empty; a
    /// single missing field is accepted.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.country().is_empty() && self.topic().is_empty() {
            return Err(ContentError::MissingFields);
        }
        Ok(())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Post-processed HTML fragment produced for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent(pub String);

impl GeneratedContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for GeneratedContent {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}
