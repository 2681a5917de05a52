//! Rephrase orchestration: window → prompt → one completion → tag parsing.

use std::sync::Arc;
use std::time::Instant;

use rephrase_constant::completion::{MAX_OUTPUT_TOKENS, TEMPERATURE};
use rephrase_core::{ConversationTurn, Mode};
use rephrase_llms::{CompletionClient, CompletionRequest, Message};
use rephrase_observability::{record_duration, record_error, rephrase_span};
use tracing::{debug, info, Instrument};

use crate::config::RephraseConfig;
use crate::context::{build_prompt, HistoryWindow};
use crate::error::{RephraseError, Result};
use crate::observer::{Exchange, ExchangeObserver, TracingObserver};
use crate::response::parse_response;
use crate::tokenizer::{BpeTokenizer, Tokenizer};

/// Inputs of one rephrase call. Borrowed from the caller for its duration.
#[derive(Debug, Clone, Copy)]
pub struct RephraseRequest<'a> {
    pub user_input: &'a str,
    pub system_prompt: Option<&'a str>,
    pub mode: Mode,
    pub history: &'a [ConversationTurn],
    pub max_turns_considered: usize,
    pub max_tokens: usize,
}

impl<'a> RephraseRequest<'a> {
    /// A request using the default mode and budgets.
    pub fn new(user_input: &'a str, history: &'a [ConversationTurn]) -> Self {
        let defaults = RephraseConfig::default();
        Self {
            user_input,
            system_prompt: None,
            mode: defaults.mode,
            history,
            max_turns_considered: defaults.max_turns_considered,
            max_tokens: defaults.max_history_tokens,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: &'a str) -> Self {
        self.system_prompt = Some(system_prompt);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_turns_considered(mut self, max: usize) -> Self {
        self.max_turns_considered = max;
        self
    }

    pub fn with_max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = max;
        self
    }

    /// Take mode and budgets from a config.
    pub fn with_config(mut self, config: &RephraseConfig) -> Self {
        self.mode = config.mode;
        self.max_turns_considered = config.max_turns_considered;
        self.max_tokens = config.max_history_tokens;
        self
    }

    /// Budgeted history for this request.
    pub fn window(&self, tokenizer: &dyn Tokenizer) -> HistoryWindow {
        HistoryWindow::build(
            self.history,
            self.max_turns_considered,
            self.max_tokens,
            tokenizer,
        )
    }

    /// The exact prompt text this request sends.
    pub fn prompt(&self, tokenizer: &dyn Tokenizer) -> String {
        build_prompt(
            self.mode,
            self.system_prompt,
            &self.window(tokenizer).render(),
            self.user_input,
        )
    }
}

/// Rewrite the latest user input into a retrieval-ready query.
///
/// Issues exactly one non-streaming completion with the prompt as a single
/// system message. No retry and no timeout is applied here. Returns either
/// `user_input` unchanged (the model judged it could not improve it) or the
/// trimmed `RESULT` block.
pub async fn rephrase(
    client: &dyn CompletionClient,
    model: &str,
    request: &RephraseRequest<'_>,
    tokenizer: &dyn Tokenizer,
    observer: &dyn ExchangeObserver,
) -> Result<String> {
    let span = rephrase_span!(model, request.mode.as_str());

    async move {
        let window = request.window(tokenizer);
        let span = tracing::Span::current();
        span.record("history.turns_kept", window.len() as u64);
        span.record("history.tokens", window.total_tokens() as u64);

        let prompt = build_prompt(
            request.mode,
            request.system_prompt,
            &window.render(),
            request.user_input,
        );
        debug!(
            turns_considered = window.considered(),
            turns_kept = window.len(),
            prompt_chars = prompt.len(),
            "prompt built"
        );

        let completion = CompletionRequest::new(model, vec![Message::system(prompt.as_str())])
            .with_temperature(TEMPERATURE)
            .with_max_tokens(MAX_OUTPUT_TOKENS);

        let start = Instant::now();
        let response = client.complete(completion).await.map_err(|e| {
            let err = RephraseError::from(e);
            record_error(&err);
            err
        })?;
        record_duration("llm.complete_duration_ms", start.elapsed());

        // Absent content is observed as an empty result.
        let raw = response.content.unwrap_or_default();
        observer.observe(&Exchange {
            model,
            mode: request.mode,
            prompt: &prompt,
            result: &raw,
        });

        if raw.is_empty() {
            let err = RephraseError::Completion(format!(
                "{} returned no message content",
                client.provider_id()
            ));
            record_error(&err);
            return Err(err);
        }

        let rephrased = parse_response(&raw, request.user_input).map_err(|err| {
            record_error(&err);
            err
        })?;

        let unchanged = rephrased == request.user_input;
        info!(unchanged, "rephrase complete");
        Ok(rephrased)
    }
    .instrument(span)
    .await
}

/// Holds the collaborators of a rephrase call. Cheap to clone; calls share no
/// mutable state.
#[derive(Clone)]
pub struct Rephraser {
    client: Arc<dyn CompletionClient>,
    model: String,
    tokenizer: Arc<dyn Tokenizer>,
    observer: Arc<dyn ExchangeObserver>,
}

impl Rephraser {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        model: impl Into<String>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            tokenizer,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Use the `cl100k_base` BPE tokenizer.
    pub fn with_bpe_tokenizer(
        client: Arc<dyn CompletionClient>,
        model: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(client, model, Arc::new(BpeTokenizer::cl100k()?)))
    }

    pub fn with_observer(mut self, observer: Arc<dyn ExchangeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub async fn rephrase(&self, request: &RephraseRequest<'_>) -> Result<String> {
        rephrase(
            self.client.as_ref(),
            &self.model,
            request,
            self.tokenizer.as_ref(),
            self.observer.as_ref(),
        )
        .await
    }
}

impl std::fmt::Debug for Rephraser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rephraser")
            .field("provider", &self.client.provider_id())
            .field("model", &self.model)
            .finish()
    }
}
