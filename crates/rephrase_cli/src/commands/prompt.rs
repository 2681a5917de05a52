//! `rephrase prompt`: print the prompt `run` would send.

use anyhow::Result;
use rephrase_runtime::BpeTokenizer;

use super::Prepared;
use crate::cli::InputArgs;
use crate::output;

pub fn handle(args: InputArgs) -> Result<()> {
    let prepared = Prepared::load(args)?;
    let tokenizer = BpeTokenizer::cl100k()?;
    let prompt = prepared.request().prompt(&tokenizer);

    if output::is_json() {
        output::data(
            "prompt",
            &serde_json::json!({ "mode": prepared.config.mode, "prompt": prompt }),
        );
    } else {
        print!("{prompt}");
        if !prompt.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
