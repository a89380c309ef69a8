//! Pull JSON out of free-form model text

use super::error::AiError;

/// Extract a JSON value that opens with `open` (`{` or `[`) from text that may
/// wrap it in markdown code fences or surrounding prose
pub fn extract_json(text: &str, open: char) -> Result<&str, AiError> {
    let close = match open {
        '{' => '}',
        '[' => ']',
        _ => return Err(AiError::Malformed(format!("Unsupported JSON delimiter: {open}"))),
    };
    let trimmed = text.trim();

    // Direct JSON
    if trimmed.starts_with(open) {
        return Ok(trimmed);
    }

    // Wrapped in ```json ... ```
    if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        if let Some(end) = after.find("```") {
            return Ok(after[..end].trim());
        }
    }

    // Wrapped in ``` ... ```
    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        if let Some(end) = after.find("```") {
            return Ok(after[..end].trim());
        }
    }

    // Embedded in prose: outermost delimiters
    if let (Some(start), Some(end)) = (trimmed.find(open), trimmed.rfind(close)) {
        if start < end {
            return Ok(&trimmed[start..=end]);
        }
    }

    Err(AiError::Malformed(format!(
        "Could not extract JSON from response: {}",
        trimmed
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object() {
        assert_eq!(extract_json(" {\"a\":1} ", '{').unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_fenced_json_block() {
        let text = "Here you go:\n```json\n[{\"title\":\"x\"}]\n```\nStay well.";
        assert_eq!(extract_json(text, '[').unwrap(), "[{\"title\":\"x\"}]");
    }

    #[test]
    fn test_plain_fence() {
        let text = "```\n{\"severity\":\"low\"}\n```";
        assert_eq!(extract_json(text, '{').unwrap(), "{\"severity\":\"low\"}");
    }

    #[test]
    fn test_embedded_in_prose() {
        let text = "Based on the symptoms {\"severity\":\"high\"} is my answer.";
        assert_eq!(extract_json(text, '{').unwrap(), "{\"severity\":\"high\"}");
    }

    #[test]
    fn test_no_json_is_malformed() {
        assert!(extract_json("I cannot help with that.", '[')
            .unwrap_err()
            .is_malformed());
    }
}
