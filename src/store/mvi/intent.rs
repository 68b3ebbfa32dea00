//! What a reducer consumes.

/// Anything that can be fed to a [`Reducer`](super::Reducer).
///
/// In this crate that is [`Action`](crate::store::Action): async lifecycle
/// events and plain commands share one type so a single dispatch reaches
/// every slice.
pub trait Intent: Send + 'static {}
