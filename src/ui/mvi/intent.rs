//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are user actions (answering a question, retrying) or system
/// events (a new result to show). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
