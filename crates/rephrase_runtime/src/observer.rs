//! Extension point for capturing prompt/result pairs.

use rephrase_core::Mode;

/// One completed model exchange.
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'a> {
    pub model: &'a str,
    pub mode: Mode,
    pub prompt: &'a str,
    pub result: &'a str,
}

/// Receives every exchange before the reply is parsed.
///
/// Called inline on the request path; implementations must not block.
pub trait ExchangeObserver: Send + Sync {
    fn observe(&self, exchange: &Exchange<'_>);
}

impl<F> ExchangeObserver for F
where
    F: Fn(&Exchange<'_>) + Send + Sync,
{
    fn observe(&self, exchange: &Exchange<'_>) {
        self(exchange)
    }
}

/// Emits each exchange as a `debug` event on target `rephrase.trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExchangeObserver for TracingObserver {
    fn observe(&self, exchange: &Exchange<'_>) {
        tracing::debug!(
            target: "rephrase.trace",
            model = %exchange.model,
            mode = %exchange.mode,
            prompt = %exchange.prompt,
            result = %exchange.result,
            "rephrase exchange"
        );
    }
}
