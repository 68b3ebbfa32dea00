use crate::models::ExtendedOffer;
use crate::store::mvi::SliceState;

/// The offer currently opened on the offer page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfferState {
    pub offer: Option<ExtendedOffer>,
    pub is_loading: bool,
}

impl SliceState for OfferState {}
