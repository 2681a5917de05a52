//! The two fixed prompt templates.
//!
//! Both embed the optional system prompt, the history block and the raw user
//! input in XML-like wrapper tags, then ask for a fixed tag skeleton that
//! [`crate::response::parse_response`] understands. The wording, spacing and
//! spelling are kept byte-for-byte as deployed prompts have them.

use rephrase_core::Mode;

const REPHRASE_INTRO: &str = "You are a summarizer expert. You will go through the prompt, the conversation messages and the user input and create an enriched  question based on the user input that will  be useful to create good vector embeddings for semantic search.\n\n";

const CHUNKS_INTRO: &str = "You are a summarizer expert. You will go through the prompt, the conversation messages and the user input and create an enriched version of the question with 5 diverse chunks or sources of informtion generated by AI,  that will  be useful to create good vector embeddings for semantic search.\n\n";

const REPHRASE_INSTRUCTIONS: &str = "Output the enriched user input as a complete and atomic question that incorporates everything required from the PROMPT and CONVERSATION (i.e. the conversation subject, replace item numbers with the actual item descriptions, etc). Use the following format:\n\n";

const CHUNKS_INSTRUCTIONS: &str = "Output the enriched user input as a complete and atomic question that incorporates everything required from the prompt and context of the conversation (i.e. the conversation subject, replace item numbers with the actual item descriptions, etc). Then create 5 possible paragraphs that might have the information that answer the question. Use the following format:\n\n";

const REPHRASE_FORMAT: &str = "```xml
<REPHRASER>
<COULD_IMPROVE_USER_INPUT>{reply with true or false}</COULD_IMPROVE_USER_INPUT>
<RESULT>
Question: {YOUR QUESTION}
</RESULT>
</REPHRASER>```";

const CHUNKS_FORMAT: &str = "```xml
<REPHRASER>
<COULD_IMPROVE_USER_INPUT>{reply with true or false}</COULD_IMPROVE_USER_INPUT>
<CHUNKS_QUALITY>{Rate the quality of the chunks 0 (completely fake, clueless) - 10 (resonable good chunks)}</CHUNKS_QUALITY>
<RESULT>
Question: {YOUR QUESTION}
Chunk 1: {YOUR CHUNK}
Chunk 2: {YOUR CHUNK}
Chunk 3: {YOUR CHUNK}
Chunk 4: {YOUR CHUNK}
Chunk 5: {YOUR CHUNK}
</RESULT>
</REPHRASER>```";

/// Assemble the prompt sent as the single system message.
///
/// The `<PROMPT>` section, tags included, is omitted when `system_prompt` is
/// absent or empty.
pub fn build_prompt(
    mode: Mode,
    system_prompt: Option<&str>,
    history: &str,
    user_input: &str,
) -> String {
    // The question-only template runs the instructions straight on after
    // `</USER INPUT>`.
    let (intro, input_end, instructions, format) = match mode {
        Mode::Rephrase => (
            REPHRASE_INTRO,
            "</USER INPUT>",
            REPHRASE_INSTRUCTIONS,
            REPHRASE_FORMAT,
        ),
        Mode::RephraseAndChunks => (
            CHUNKS_INTRO,
            "</USER INPUT>\n\n",
            CHUNKS_INSTRUCTIONS,
            CHUNKS_FORMAT,
        ),
    };

    let mut prompt = String::with_capacity(
        intro.len() + instructions.len() + format.len() + history.len() + user_input.len() + 128,
    );
    prompt.push_str(intro);
    if let Some(system_prompt) = system_prompt.filter(|p| !p.is_empty()) {
        prompt.push_str("<PROMPT>");
        prompt.push_str(system_prompt);
        prompt.push_str("</PROMPT>\n\n");
    }
    prompt.push_str("<CONVERSATION>");
    prompt.push_str(history);
    prompt.push_str("</CONVERSATION>\n\n");
    prompt.push_str("<USER INPUT>");
    prompt.push_str(user_input);
    prompt.push_str(input_end);
    prompt.push_str(instructions);
    prompt.push_str(format);
    prompt
}
