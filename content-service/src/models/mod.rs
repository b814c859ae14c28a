pub mod content;

pub use content::{ContentRequest, GeneratedContent};
