use crate::store::action::{Action, Lifecycle};
use crate::store::mvi::Reducer;
use crate::store::offer::state::OfferState;

pub struct OfferReducer;

impl Reducer for OfferReducer {
    type State = OfferState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::GetOffer(Lifecycle::Pending) => OfferState {
                is_loading: true,
                ..state
            },
            Action::GetOffer(Lifecycle::Fulfilled(offer)) => OfferState {
                offer: Some(offer.clone()),
                is_loading: false,
            },
            Action::GetOffer(Lifecycle::Rejected(_)) => OfferState {
                is_loading: false,
                ..state
            },
            Action::UpdateFavoriteOffer(Lifecycle::Fulfilled(updated)) => match state.offer {
                Some(mut offer) if offer.id == updated.id => {
                    offer.is_favorite = updated.is_favorite;
                    OfferState {
                        offer: Some(offer),
                        ..state
                    }
                }
                offer => OfferState { offer, ..state },
            },
            _ => state,
        }
    }
}
