//! Session token persistence.
//!
//! The store is deliberately dumb: it only keeps the opaque token between
//! runs. Deciding what a missing token means is up to the action layer.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

/// Durable storage for the session token.
///
/// All methods are synchronous and infallible from the caller's point of
/// view. An unreadable store behaves like an empty one.
pub trait TokenStore: Send + Sync {
    /// Stored token, or an empty string when there is none.
    fn get_token(&self) -> String;

    fn set_token(&self, token: &str);

    fn remove_token(&self);
}
