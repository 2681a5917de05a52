//! `rephrase window`: inspect the budgeted history block.

use anyhow::Result;
use rephrase_runtime::{BpeTokenizer, CharEstimateTokenizer, HistoryWindow, Tokenizer};
use serde::Serialize;

use super::effective_config;
use crate::cli::HistoryArgs;
use crate::history;
use crate::output;

const PREVIEW_CHARS: usize = 60;

#[derive(Serialize)]
struct LineRow<'a> {
    index: usize,
    tokens: usize,
    line: &'a str,
}

pub fn handle(args: HistoryArgs, estimate: bool) -> Result<()> {
    let config = effective_config(None, &args);
    let turns = history::load(args.history.as_deref())?;

    let tokenizer: Box<dyn Tokenizer> = if estimate {
        Box::new(CharEstimateTokenizer)
    } else {
        Box::new(BpeTokenizer::cl100k()?)
    };
    let window = HistoryWindow::build(
        &turns,
        config.max_turns_considered,
        config.max_history_tokens,
        tokenizer.as_ref(),
    );

    output::header("History window");
    output::kv("turns", &turns.len().to_string());
    output::kv("considered", &window.considered().to_string());
    output::kv("kept", &window.len().to_string());
    output::kv(
        "tokens",
        &format!("{} / {}", window.total_tokens(), config.max_history_tokens),
    );

    if window.is_empty() {
        output::dim("No history fits the budget.");
        return Ok(());
    }

    let rows: Vec<LineRow<'_>> = window
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| LineRow {
            index,
            tokens: tokenizer.count_tokens(line),
            line,
        })
        .collect();

    let mut table = output::table(&["#", "Tokens", "Line"]);
    for row in &rows {
        output::table_row(
            &mut table,
            &row.index.to_string(),
            &[row.tokens.to_string(), preview(row.line)],
        );
    }
    output::table_print(&table, &rows);
    output::block("Rendered", &window.render());
    Ok(())
}

fn preview(line: &str) -> String {
    let single = line.replace('\n', " ");
    if single.chars().count() <= PREVIEW_CHARS {
        return single;
    }
    let cut: String = single.chars().take(PREVIEW_CHARS).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview() {
        assert_eq!(preview("**user**: hi\nthere"), "**user**: hi there");
        let long = "x".repeat(PREVIEW_CHARS + 10);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), PREVIEW_CHARS + 1);
        assert!(cut.ends_with('…'));
    }
}
