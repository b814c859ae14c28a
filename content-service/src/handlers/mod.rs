//! HTTP handlers for the content service.

pub mod content;
pub mod health;
pub mod metrics;

pub use content::generate_content;
pub use health::{health_check, readiness_check};
pub use metrics::metrics;
