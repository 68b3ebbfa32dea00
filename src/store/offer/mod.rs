mod reducer;
mod state;

pub use reducer::OfferReducer;
pub use state::OfferState;
