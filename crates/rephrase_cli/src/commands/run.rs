//! `rephrase run`: one real completion call.

use std::sync::Arc;

use anyhow::Result;
use rephrase_core::Mode;
use rephrase_llms::ChatCompletionsClient;
use rephrase_runtime::{Exchange, Rephraser, RephrasedQuery};
use serde::Serialize;

use super::Prepared;
use crate::cli::InputArgs;
use crate::output;

#[derive(Serialize)]
struct RunOutput<'a> {
    model: &'a str,
    mode: Mode,
    input: &'a str,
    unchanged: bool,
    result: &'a str,
    query: RephrasedQuery,
}

pub async fn handle(args: InputArgs, model: Option<String>, show_prompt: bool) -> Result<()> {
    let mut prepared = Prepared::load(args)?;
    if let Some(model) = model {
        prepared.config.model = model;
    }
    prepared.config.validate()?;

    let client = ChatCompletionsClient::from_env()?;
    let spinner = output::spinner(&format!("Rephrasing with {}...", prepared.config.model));

    let mut rephraser = Rephraser::with_bpe_tokenizer(Arc::new(client), &prepared.config.model)?;
    if show_prompt {
        let bar = spinner.clone();
        rephraser = rephraser.with_observer(Arc::new(move |exchange: &Exchange<'_>| {
            bar.suspend(|| {
                output::block("Prompt", exchange.prompt);
                output::block("Reply", exchange.result);
            });
        }));
    }

    let request = prepared.request();
    let result = match rephraser.rephrase(&request).await {
        Ok(result) => result,
        Err(e) => {
            output::spinner_error(&spinner, "Rephrase failed");
            return Err(e.into());
        }
    };
    let unchanged = result == prepared.user_input;
    output::spinner_success(
        &spinner,
        if unchanged {
            "Input already self-contained"
        } else {
            "Rephrased"
        },
    );

    if output::is_json() {
        output::data(
            "rephrase",
            &RunOutput {
                model: rephraser.model(),
                mode: request.mode,
                input: &prepared.user_input,
                unchanged,
                result: &result,
                query: RephrasedQuery::parse(&result),
            },
        );
    } else {
        println!("{result}");
    }
    Ok(())
}
