/// True when the text holds nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Check whether the haystack contains any of the given needles
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Strip a surrounding markdown code fence (```json ... ```), if any
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening line
    match inner.find('\n') {
        Some(pos) if !inner[..pos].trim().contains(char::is_whitespace) => inner[pos + 1..].trim(),
        _ => inner.trim(),
    }
}
