//! Clean-up of model output before JSON parsing.

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Strips a leading ```` ```json ```` or ```` ``` ```` fence and a trailing
/// ```` ``` ```` fence, then trims whitespace.
///
/// Fences inside the payload are left alone.
///
/// # Examples
///
/// ```
/// use kanban::suggestion::domain::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n[]\n```"), "[]");
/// assert_eq!(strip_code_fences("  [1]  "), "[1]");
/// ```
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix(JSON_FENCE)
        .or_else(|| trimmed.strip_prefix(FENCE))
        .unwrap_or(trimmed);
    let without_close = without_open
        .trim_end()
        .strip_suffix(FENCE)
        .unwrap_or(without_open);
    without_close.trim()
}
