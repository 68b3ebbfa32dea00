use crate::store::action::Action;
use crate::store::comments::{CommentsReducer, CommentsState};
use crate::store::favorite_offers::{FavoriteOffersReducer, FavoriteOffersState};
use crate::store::mvi::{Reducer, SliceState};
use crate::store::nearby_offers::{NearbyOffersReducer, NearbyOffersState};
use crate::store::offer::{OfferReducer, OfferState};
use crate::store::offers::{OffersReducer, OffersState};
use crate::store::user::{UserReducer, UserState};

/// Aggregate read model: one field per slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub offers: OffersState,
    pub offer: OfferState,
    pub nearby_offers: NearbyOffersState,
    pub favorite_offers: FavoriteOffersState,
    pub comments: CommentsState,
    pub user: UserState,
}

impl SliceState for RootState {}

/// Offers every action to every slice reducer.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        RootState {
            offers: OffersReducer::reduce(state.offers, intent),
            offer: OfferReducer::reduce(state.offer, intent),
            nearby_offers: NearbyOffersReducer::reduce(state.nearby_offers, intent),
            favorite_offers: FavoriteOffersReducer::reduce(state.favorite_offers, intent),
            comments: CommentsReducer::reduce(state.comments, intent),
            user: UserReducer::reduce(state.user, intent),
        }
    }
}
