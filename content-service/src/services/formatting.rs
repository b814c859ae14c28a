//! Cleanup of raw model output before it is returned to the caller.

/// Opening marker of an HTML code fence.
pub const HTML_FENCE_OPEN: &str = "```html";

/// Closing marker of a code fence.
pub const FENCE_CLOSE: &str = "```";

/// Strip a markdown code fence the model may have wrapped its answer in.
///
/// Plain literal matching, applied in order: trim; when the text starts with
/// ```` ```html ````, drop every occurrence of that marker and trim; when the
/// text then ends with ```` ``` ````, drop those three characters and trim.
pub fn strip_code_fences(raw: &str) -> String {
    let mut content = raw.trim().to_string();

    if content.starts_with(HTML_FENCE_OPEN) {
        content = content.replace(HTML_FENCE_OPEN, "").trim().to_string();
    }

    if let Some(stripped) = content.strip_suffix(FENCE_CLOSE) {
        content = stripped.trim().to_string();
    }

    content
}
