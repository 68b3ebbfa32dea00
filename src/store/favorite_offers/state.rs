use std::sync::Arc;

use crate::models::Offer;
use crate::store::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoriteOffersState {
    pub favorite_offers: Arc<Vec<Offer>>,
    pub is_loading: bool,
}

impl SliceState for FavoriteOffersState {}
