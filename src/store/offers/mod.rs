mod reducer;
mod state;

pub use reducer::OffersReducer;
pub use state::OffersState;
