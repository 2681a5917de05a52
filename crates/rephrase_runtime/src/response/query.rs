//! Caller-side split of a result block into question and chunks.

use serde::Serialize;

const QUESTION_PREFIX: &str = "Question:";
const CHUNK_PREFIX: &str = "Chunk ";

/// A result block split on its `Question:` and `Chunk N:` lines.
///
/// Lines that carry no prefix continue the previous field. Text before any
/// prefixed line is ignored unless nothing is prefixed at all, in which case
/// the whole block is taken as the question (this is what an unchanged user
/// input looks like).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RephrasedQuery {
    pub question: Option<String>,
    pub chunks: Vec<String>,
}

enum Field {
    None,
    Question,
    Chunk,
}

impl RephrasedQuery {
    pub fn parse(block: &str) -> Self {
        let mut query = Self::default();
        let mut current = Field::None;

        for line in block.lines() {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix(QUESTION_PREFIX) {
                query.question = Some(rest.trim().to_string());
                current = Field::Question;
            } else if let Some(rest) = chunk_body(trimmed) {
                query.chunks.push(rest.trim().to_string());
                current = Field::Chunk;
            } else if !trimmed.is_empty() {
                let target = match current {
                    Field::Question => query.question.as_mut(),
                    Field::Chunk => query.chunks.last_mut(),
                    Field::None => None,
                };
                if let Some(target) = target {
                    target.push('\n');
                    target.push_str(trimmed);
                }
            }
        }

        if query.question.is_none() && query.chunks.is_empty() {
            let whole = block.trim();
            if !whole.is_empty() {
                query.question = Some(whole.to_string());
            }
        }

        query
    }

    /// The question, or `fallback` when the block had none.
    pub fn question_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.question.as_deref().unwrap_or(fallback)
    }
}

/// `Chunk <digits>: body` → `body`
fn chunk_body(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(CHUNK_PREFIX)?;
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_only() {
        let query = RephrasedQuery::parse("Question: What is the refund policy for item X?");
        assert_eq!(
            query.question.as_deref(),
            Some("What is the refund policy for item X?")
        );
        assert!(query.chunks.is_empty());
    }

    #[test]
    fn test_parse_question_and_chunks() {
        let block = "Question: Which bikes ship free?\n\
                     Chunk 1: Free shipping applies to orders over $50.\n\
                     Chunk 2: Road bikes ship free within the US.\n\
                     Chunk 3: c3\n\
                     Chunk 4: c4\n\
                     Chunk 5: c5";
        let query = RephrasedQuery::parse(block);
        assert_eq!(query.question.as_deref(), Some("Which bikes ship free?"));
        assert_eq!(query.chunks.len(), 5);
        assert_eq!(query.chunks[1], "Road bikes ship free within the US.");
    }

    #[test]
    fn test_continuation_lines() {
        let block = "Question: q\nChunk 1: first line\nsecond line";
        let query = RephrasedQuery::parse(block);
        assert_eq!(query.chunks, vec!["first line\nsecond line".to_string()]);
    }

    #[test]
    fn test_unprefixed_block_is_question() {
        let query = RephrasedQuery::parse("how much is it?");
        assert_eq!(query.question_or("fallback"), "how much is it?");
    }

    #[test]
    fn test_empty_block() {
        let query = RephrasedQuery::parse("  ");
        assert_eq!(query, RephrasedQuery::default());
        assert_eq!(query.question_or("raw input"), "raw input");
    }

    #[test]
    fn test_chunk_prefix_needs_number() {
        assert_eq!(chunk_body("Chunk 12: x"), Some(" x"));
        assert_eq!(chunk_body("Chunk A: x"), None);
        assert_eq!(chunk_body("Chunky: x"), None);
    }
}
