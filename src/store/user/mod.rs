mod reducer;
mod state;

pub use reducer::UserReducer;
pub use state::UserState;
