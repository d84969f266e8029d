use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError, meal_plan::value_objects::ExtractionResult,
};

/// A markdown fence with its optional language label. The body is matched lazily so each
/// match stops at its own closing fence.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_+.-]*)[ \t]*\n?(.*?)```").expect("fenced block pattern is valid")
});

/// Returns the trimmed contents of the first fenced block of `text` that is unlabelled or
/// labelled `json` in any case. Blocks in other languages are skipped.
pub fn fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures_iter(text)
        .find(|captures| {
            let label = captures.get(1).map_or("", |label| label.as_str());
            label.is_empty() || label.eq_ignore_ascii_case("json")
        })
        .and_then(|captures| captures.get(2))
        .map(|body| body.as_str().trim())
}

/// Pulls JSON out of a raw model answer.
///
/// Tries the whole trimmed answer first, then the first fenced block, and
/// otherwise hands the answer back as plain text. Only a blank answer is an error.
pub fn extract(raw: &str) -> Result<ExtractionResult, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyResponse);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => return Ok(ExtractionResult::DirectJson(value)),
        Err(e) => tracing::debug!("answer is not direct JSON: {}", e),
    }

    if let Some(block) = fenced_block(trimmed) {
        match serde_json::from_str::<Value>(block) {
            Ok(value) => return Ok(ExtractionResult::FencedJson(value)),
            Err(e) => tracing::debug!("fenced block is not valid JSON, ignoring it: {}", e),
        }
    }

    Ok(ExtractionResult::PlainText(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_direct_json() {
        let raw = r#"  {"grocery_list": [], "total_price": 0}  "#;
        assert_eq!(
            extract(raw).unwrap(),
            ExtractionResult::DirectJson(json!({"grocery_list": [], "total_price": 0}))
        );
    }

    #[test]
    fn test_pure_json_never_falls_through() {
        for raw in ["42", "\"text\"", "[1, 2]", "null", "{\"a\": \"```json {} ```\"}"] {
            assert!(
                matches!(extract(raw).unwrap(), ExtractionResult::DirectJson(_)),
                "{raw} should be direct JSON"
            );
        }
    }

    #[test]
    fn test_fenced_json_matches_unwrapped() {
        let inner = r#"{"meal_plan": {"grocery_list": [{"item": "Eggs", "price": 40}]}}"#;
        let raw = format!("```json\n{inner}\n```");
        let ExtractionResult::DirectJson(expected) = extract(inner).unwrap() else {
            panic!("inner payload should be direct JSON");
        };
        assert_eq!(extract(&raw).unwrap(), ExtractionResult::FencedJson(expected));
    }

    #[test]
    fn test_fence_label_is_optional_and_case_insensitive() {
        let untagged = "Here you go:\n```\n{\"a\": 1}\n```\nEnjoy!";
        let upper = "```JSON\n{\"a\": 1}\n```";
        assert_eq!(
            extract(untagged).unwrap(),
            ExtractionResult::FencedJson(json!({"a": 1}))
        );
        assert_eq!(extract(upper).unwrap(), ExtractionResult::FencedJson(json!({"a": 1})));
    }

    #[test]
    fn test_only_first_fence_is_considered() {
        let raw = "```json\n{\"first\": true}\n```\nand\n```json\n{\"second\": true}\n```";
        assert_eq!(
            extract(raw).unwrap(),
            ExtractionResult::FencedJson(json!({"first": true}))
        );

        let broken_first = "```json\n{not json}\n```\n```json\n{\"second\": true}\n```";
        assert_eq!(
            extract(broken_first).unwrap(),
            ExtractionResult::PlainText(broken_first.to_string())
        );
    }

    #[test]
    fn test_fences_in_other_languages_are_skipped() {
        let raw = "Setup:\n```python\nprint(1)\n```\nPlan:\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract(raw).unwrap(), ExtractionResult::FencedJson(json!({"a": 1})));

        let jsonc = "```jsonc\n{\"b\": 2}\n```\n```\n{\"a\": 1}\n```";
        assert_eq!(extract(jsonc).unwrap(), ExtractionResult::FencedJson(json!({"a": 1})));

        let only_other = "```text\n{\"a\": 1}\n```";
        assert_eq!(
            extract(only_other).unwrap(),
            ExtractionResult::PlainText(only_other.to_string())
        );
    }

    #[test]
    fn test_prose_is_plain_text() {
        let raw = "Sure! Here's a plan: eat more vegetables.";
        assert_eq!(
            extract(raw).unwrap(),
            ExtractionResult::PlainText(raw.to_string())
        );
    }

    #[test]
    fn test_blank_answer_is_empty_response() {
        assert_eq!(extract(""), Err(CoreError::EmptyResponse));
        assert_eq!(extract(" \n\t "), Err(CoreError::EmptyResponse));
    }

    #[test]
    fn test_fenced_block_helper() {
        assert_eq!(fenced_block("no fences here"), None);
        assert_eq!(fenced_block("```json\n{}\n```"), Some("{}"));
        assert_eq!(fenced_block("``` unterminated"), None);
        assert_eq!(fenced_block("```json {\"a\": 1} ```"), Some("{\"a\": 1}"));
        assert_eq!(fenced_block("```sh\nls\n```"), None);
    }
}
