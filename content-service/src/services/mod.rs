pub mod content;
pub mod formatting;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use content::ContentService;
pub use formatting::strip_code_fences;
pub use prompt::build_prompt;
