use std::sync::Arc;

use crate::store::action::{Action, Lifecycle};
use crate::store::mvi::Reducer;
use crate::store::offers::state::OffersState;
use crate::utils::replace_by_id;

pub struct OffersReducer;

impl Reducer for OffersReducer {
    type State = OffersState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::GetOffers(Lifecycle::Pending) => OffersState {
                is_loading: true,
                ..state
            },
            Action::GetOffers(Lifecycle::Fulfilled(offers)) => OffersState {
                offers: Arc::new(offers.clone()),
                is_loading: false,
                ..state
            },
            Action::GetOffers(Lifecycle::Rejected(_)) => OffersState {
                is_loading: false,
                ..state
            },
            Action::ChangeLocation(location) => OffersState {
                location: *location,
                ..state
            },
            Action::ChangeSortType(sort_type) => OffersState {
                sort_type: *sort_type,
                ..state
            },
            Action::ClearOffers if !state.offers.is_empty() => OffersState {
                offers: Arc::default(),
                ..state
            },
            Action::UpdateFavoriteOffer(Lifecycle::Fulfilled(offer)) => {
                let mut state = state;
                replace_by_id(&mut state.offers, offer);
                state
            }
            Action::GetFavoriteOffers(Lifecycle::Fulfilled(favorites)) => {
                // Favorites missing from the catalogue are skipped.
                let mut state = state;
                for favorite in favorites {
                    replace_by_id(&mut state.offers, favorite);
                }
                state
            }
            _ => state,
        }
    }
}
