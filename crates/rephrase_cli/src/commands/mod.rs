//! Command dispatch.

mod config;
mod prompt;
mod run;
mod window;

use anyhow::{Context, Result};
use rephrase_core::{ConversationTurn, Mode};
use rephrase_runtime::{RephraseConfig, RephraseRequest};

use crate::cli::{Cli, Command, HistoryArgs, InputArgs};
use crate::history;
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            input,
            model,
            show_prompt,
        } => run::handle(input, model, show_prompt).await,
        Command::Prompt { input } => prompt::handle(input),
        Command::Window { history, estimate } => window::handle(history, estimate),
        Command::Config { action } => config::handle(action),
    }
}

/// Environment config with command-line overrides applied.
fn effective_config(mode: Option<&str>, history: &HistoryArgs) -> RephraseConfig {
    let mut config = RephraseConfig::from_env();
    if let Some(name) = mode {
        config.mode = resolve_mode(name);
    }
    if let Some(max) = history.max_turns {
        config.max_turns_considered = max;
    }
    if let Some(max) = history.max_history_tokens {
        config.max_history_tokens = max;
    }
    config
}

fn resolve_mode(name: &str) -> Mode {
    let mode = Mode::from_name(Some(name));
    if mode.as_str() != name {
        output::warning(&format!("Unknown mode '{name}', using {mode}"));
    }
    mode
}

/// Owned inputs for one request; the request itself borrows from here.
struct Prepared {
    config: RephraseConfig,
    turns: Vec<ConversationTurn>,
    user_input: String,
    system_prompt: Option<String>,
}

impl Prepared {
    fn load(args: InputArgs) -> Result<Self> {
        let config = effective_config(args.mode.as_deref(), &args.history);
        let turns = history::load(args.history.history.as_deref())?;
        let system_prompt = match (args.system_prompt, args.system_prompt_file) {
            (Some(text), _) => Some(text),
            (None, Some(path)) => Some(
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            ),
            (None, None) => None,
        };
        Ok(Self {
            config,
            turns,
            user_input: args.input,
            system_prompt,
        })
    }

    fn request(&self) -> RephraseRequest<'_> {
        let request = RephraseRequest::new(&self.user_input, &self.turns).with_config(&self.config);
        match self.system_prompt.as_deref() {
            Some(system_prompt) => request.with_system_prompt(system_prompt),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mode() {
        assert_eq!(resolve_mode("rephrase"), Mode::Rephrase);
        assert_eq!(resolve_mode("rephrase-and-chunks"), Mode::RephraseAndChunks);
        assert_eq!(resolve_mode("Rephrase"), Mode::RephraseAndChunks);
        assert_eq!(resolve_mode("summarize"), Mode::RephraseAndChunks);
    }

    #[test]
    fn test_overrides_win() {
        let args = HistoryArgs {
            history: None,
            max_turns: Some(0),
            max_history_tokens: Some(42),
        };
        let config = effective_config(Some("rephrase"), &args);
        assert_eq!(config.mode, Mode::Rephrase);
        assert_eq!(config.max_turns_considered, 0);
        assert_eq!(config.max_history_tokens, 42);
    }

    #[test]
    fn test_prepared_request() {
        let prepared = Prepared {
            config: RephraseConfig::new().with_mode(Mode::Rephrase),
            turns: vec![ConversationTurn::user("hi")],
            user_input: "and item 2?".to_string(),
            system_prompt: Some("Be brief.".to_string()),
        };
        let request = prepared.request();
        assert_eq!(request.user_input, "and item 2?");
        assert_eq!(request.system_prompt, Some("Be brief."));
        assert_eq!(request.mode, Mode::Rephrase);
        assert_eq!(request.history.len(), 1);
    }
}
