mod reducer;
mod state;

pub use reducer::CommentsReducer;
pub use state::CommentsState;
