//! Base trait for intents in the MVI loop.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (taps, pull-to-refresh, scroll-to-end)
/// - System events (fetch completions, timers)
///
/// Intents are processed by reducers to produce new states. Controllers keep
/// the user-facing intent enum separate from the internal transition enum the
/// reducer consumes; both are intents in this sense.
pub trait Intent: Send + 'static {}
