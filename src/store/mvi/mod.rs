//! Traits shared by the slice reducers.
//!
//! A dispatched [`Action`](crate::store::Action) is handed to each slice's
//! reducer in turn. Selectors then read the resulting
//! [`RootState`](crate::store::RootState); nothing else writes to it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
