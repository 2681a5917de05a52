pub mod config;
pub mod context;
pub mod error;
pub mod observer;
pub mod rephraser;
pub mod response;
pub mod tokenizer;

pub use config::RephraseConfig;
pub use context::{build_prompt, window_history, HistoryWindow};
pub use error::{RephraseError, Result};
pub use observer::{Exchange, ExchangeObserver, TracingObserver};
pub use rephraser::{rephrase, RephraseRequest, Rephraser};
pub use response::{extract_tag, parse_response, RephrasedQuery};
pub use tokenizer::{BpeTokenizer, CharEstimateTokenizer, Tokenizer};

pub use rephrase_core::{ConversationTurn, Mode, Role};
