mod reducer;
mod state;

pub use reducer::FavoriteOffersReducer;
pub use state::FavoriteOffersState;
