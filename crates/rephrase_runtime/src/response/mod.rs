//! Tag extraction from the model reply.
//!
//! This is substring matching on literal tags, not XML parsing: the value of a
//! tag is the text after its first opening tag up to the next closing tag.

mod query;

pub use query::RephrasedQuery;

use crate::error::{RephraseError, Result};

pub const COULD_IMPROVE_TAG: &str = "COULD_IMPROVE_USER_INPUT";
pub const RESULT_TAG: &str = "RESULT";

/// Text strictly between `<tag>` and the following `</tag>`.
pub fn extract_tag<'a>(text: &'a str, tag: &str) -> Result<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let start = text
        .find(&open)
        .map(|idx| idx + open.len())
        .ok_or_else(|| RephraseError::malformed(tag))?;
    let rest = &text[start..];
    let end = rest.find(&close).ok_or_else(|| RephraseError::malformed(tag))?;

    Ok(&rest[..end])
}

/// Interpret a raw reply.
///
/// A self-assessment of `false` (any case) returns `user_input` unchanged,
/// whatever the `RESULT` says. Otherwise the trimmed `RESULT` body is returned
/// as-is; splitting question from chunks is left to the caller.
pub fn parse_response(raw: &str, user_input: &str) -> Result<String> {
    let could_improve = extract_tag(raw, COULD_IMPROVE_TAG)?.trim();
    if could_improve.eq_ignore_ascii_case("false") {
        return Ok(user_input.to_string());
    }

    Ok(extract_tag(raw, RESULT_TAG)?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPROVED: &str = "```xml
<REPHRASER>
<COULD_IMPROVE_USER_INPUT>true</COULD_IMPROVE_USER_INPUT>
<RESULT>
Question: What is the refund policy for item X?
</RESULT>
</REPHRASER>```";

    #[test]
    fn test_extract_tag() {
        assert_eq!(extract_tag("<A> x </A>", "A").unwrap(), " x ");
        assert_eq!(extract_tag("pre<A></A>post", "A").unwrap(), "");
    }

    #[test]
    fn test_extract_tag_uses_first_pair() {
        assert_eq!(extract_tag("<A>1</A><A>2</A>", "A").unwrap(), "1");
    }

    #[test]
    fn test_extract_tag_missing_open() {
        let err = extract_tag("no tags here", "RESULT").unwrap_err();
        assert!(matches!(err, RephraseError::MalformedResponse { ref tag } if tag == "RESULT"));
    }

    #[test]
    fn test_extract_tag_missing_close() {
        let err = extract_tag("<RESULT>dangling", "RESULT").unwrap_err();
        assert!(matches!(err, RephraseError::MalformedResponse { .. }));
    }

    #[test]
    fn test_close_before_open_is_missing() {
        assert!(extract_tag("</A>text<A>", "A").is_err());
    }

    #[test]
    fn test_parse_improved_result() {
        let out = parse_response(IMPROVED, "and X?").unwrap();
        assert_eq!(out, "Question: What is the refund policy for item X?");
    }

    #[test]
    fn test_parse_false_returns_input() {
        for flag in ["false", "False", " FALSE \n"] {
            let raw = format!(
                "<COULD_IMPROVE_USER_INPUT>{flag}</COULD_IMPROVE_USER_INPUT><RESULT>Question: rewritten</RESULT>"
            );
            assert_eq!(parse_response(&raw, "original words").unwrap(), "original words");
        }
    }

    #[test]
    fn test_parse_false_without_result_still_returns_input() {
        let raw = "<COULD_IMPROVE_USER_INPUT>false</COULD_IMPROVE_USER_INPUT>";
        assert_eq!(parse_response(raw, "keep me").unwrap(), "keep me");
    }

    #[test]
    fn test_parse_non_boolean_flag_takes_result() {
        let raw = "<COULD_IMPROVE_USER_INPUT>maybe</COULD_IMPROVE_USER_INPUT><RESULT> Question: q </RESULT>";
        assert_eq!(parse_response(raw, "x").unwrap(), "Question: q");
    }

    #[test]
    fn test_parse_missing_result_fails() {
        let raw = "<COULD_IMPROVE_USER_INPUT>true</COULD_IMPROVE_USER_INPUT>";
        let err = parse_response(raw, "x").unwrap_err();
        assert!(matches!(err, RephraseError::MalformedResponse { ref tag } if tag == RESULT_TAG));
    }

    #[test]
    fn test_parse_missing_flag_fails() {
        let err = parse_response("<RESULT>Question: q</RESULT>", "x").unwrap_err();
        assert!(
            matches!(err, RephraseError::MalformedResponse { ref tag } if tag == COULD_IMPROVE_TAG)
        );
    }
}
