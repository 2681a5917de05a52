//! History windowing under a token budget.
//!
//! Turns are admitted newest-first and admission stops at the first turn that
//! would overflow the budget; older turns are never backfilled. Each rendered
//! line is counted on its own, so the `"\n\n"` joiner is not part of the
//! budget.

use rephrase_core::ConversationTurn;

use crate::tokenizer::Tokenizer;

const TURN_SEPARATOR: &str = "\n\n";

/// The recent turns that fit the budget, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryWindow {
    lines: Vec<String>,
    total_tokens: usize,
    considered: usize,
}

impl HistoryWindow {
    pub fn build(
        turns: &[ConversationTurn],
        max_turns_considered: usize,
        max_tokens: usize,
        tokenizer: &dyn Tokenizer,
    ) -> Self {
        if max_turns_considered == 0 || max_tokens == 0 {
            return Self::default();
        }

        let start = turns.len().saturating_sub(max_turns_considered);
        let recent = &turns[start..];

        let mut lines = Vec::with_capacity(recent.len());
        let mut total_tokens = 0usize;

        for turn in recent.iter().rev() {
            let line = turn.render();
            let tokens = tokenizer.count_tokens(&line);
            let next_total = total_tokens.saturating_add(tokens);
            if next_total > max_tokens {
                break;
            }
            total_tokens = next_total;
            lines.push(line);
        }
        lines.reverse();

        Self {
            lines,
            total_tokens,
            considered: recent.len(),
        }
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of turns kept.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of per-line token counts (joiner excluded).
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Number of trailing turns examined before budgeting.
    pub fn considered(&self) -> usize {
        self.considered
    }

    pub fn render(&self) -> String {
        self.lines.join(TURN_SEPARATOR)
    }
}

/// Render the budgeted history block for a conversation.
pub fn window_history(
    turns: &[ConversationTurn],
    max_turns_considered: usize,
    max_tokens: usize,
    tokenizer: &dyn Tokenizer,
) -> String {
    HistoryWindow::build(turns, max_turns_considered, max_tokens, tokenizer).render()
}
