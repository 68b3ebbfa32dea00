use std::sync::Arc;

use crate::store::action::{Action, Lifecycle};
use crate::store::mvi::Reducer;
use crate::store::nearby_offers::state::NearbyOffersState;
use crate::utils::replace_by_id;

pub struct NearbyOffersReducer;

impl Reducer for NearbyOffersReducer {
    type State = NearbyOffersState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::GetNearbyOffers(Lifecycle::Pending) => NearbyOffersState {
                is_loading: true,
                ..state
            },
            Action::GetNearbyOffers(Lifecycle::Fulfilled(offers)) => NearbyOffersState {
                nearby_offers: Arc::new(offers.clone()),
                is_loading: false,
            },
            Action::GetNearbyOffers(Lifecycle::Rejected(_)) => NearbyOffersState {
                is_loading: false,
                ..state
            },
            Action::UpdateFavoriteOffer(Lifecycle::Fulfilled(offer)) => {
                let mut state = state;
                replace_by_id(&mut state.nearby_offers, offer);
                state
            }
            _ => state,
        }
    }
}
