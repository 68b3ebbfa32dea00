use std::sync::Arc;

use crate::models::{CityName, Offer, SortType};
use crate::store::mvi::SliceState;

/// Full offer catalogue plus the list controls of the home page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OffersState {
    pub offers: Arc<Vec<Offer>>,
    pub location: CityName,
    pub sort_type: SortType,
    pub is_loading: bool,
}

impl SliceState for OffersState {}
