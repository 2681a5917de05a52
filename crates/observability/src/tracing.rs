//! Span helpers

/// Create a span for one rephrase call
///
/// # Example
///
/// ```rust
/// use rephrase_observability::rephrase_span;
///
/// let span = rephrase_span!("gpt-4o-mini", "rephrase");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! rephrase_span {
    ($model:expr, $mode:expr) => {
        tracing::info_span!(
            "rephrase.run",
            model = $model,
            mode = $mode,
            history.turns_kept = tracing::field::Empty,
            history.tokens = tracing::field::Empty,
            llm.complete_duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and emit an error event.
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record a duration in milliseconds on the current span.
///
/// The field must have been declared on the span (see [`rephrase_span!`]).
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
