mod reducer;
mod state;

pub use reducer::NearbyOffersReducer;
pub use state::NearbyOffersState;
