//! Conversation history input.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use rephrase_core::ConversationTurn;

/// Read a JSON array of turns from a file, or from stdin when the path is `-`.
/// No path means an empty conversation.
pub fn load(path: Option<&Path>) -> Result<Vec<ConversationTurn>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read history from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read history file {}", path.display()))?
    };

    parse(&raw).with_context(|| format!("Invalid history in {}", path.display()))
}

fn parse(raw: &str) -> Result<Vec<ConversationTurn>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}
