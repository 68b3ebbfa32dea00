use std::sync::Arc;

use crate::store::action::{Action, Lifecycle};
use crate::store::favorite_offers::state::FavoriteOffersState;
use crate::store::mvi::Reducer;
use crate::utils::replace_by_id;

pub struct FavoriteOffersReducer;

impl Reducer for FavoriteOffersReducer {
    type State = FavoriteOffersState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::GetFavoriteOffers(Lifecycle::Pending) => FavoriteOffersState {
                is_loading: true,
                ..state
            },
            Action::GetFavoriteOffers(Lifecycle::Fulfilled(offers)) => FavoriteOffersState {
                favorite_offers: Arc::new(offers.clone()),
                is_loading: false,
            },
            Action::GetFavoriteOffers(Lifecycle::Rejected(_)) => FavoriteOffersState {
                is_loading: false,
                ..state
            },
            Action::ClearFavoriteOffers if !state.favorite_offers.is_empty() => {
                FavoriteOffersState {
                    favorite_offers: Arc::default(),
                    ..state
                }
            }
            Action::UpdateFavoriteOffer(Lifecycle::Fulfilled(offer)) => {
                let mut state = state;
                if offer.is_favorite {
                    if !replace_by_id(&mut state.favorite_offers, offer) {
                        Arc::make_mut(&mut state.favorite_offers).push(offer.clone());
                    }
                } else if state.favorite_offers.iter().any(|item| item.id == offer.id) {
                    Arc::make_mut(&mut state.favorite_offers).retain(|item| item.id != offer.id);
                }
                state
            }
            _ => state,
        }
    }
}
