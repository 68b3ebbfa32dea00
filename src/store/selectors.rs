//! Read projections over [`RootState`].
//!
//! Plain selectors borrow from the state, so their result is the very data
//! the slice holds. Derived lists that have to be rebuilt are memoized by
//! [`CityOffersSelector`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::{
    AppRoute, AuthInfo, AuthorizationStatus, CityName, Comment, ExtendedOffer, FavoriteStatus,
    FavoriteUpdate, Offer, SortType,
};
use crate::store::root::RootState;
use crate::utils::{filter_by_city, group_by_city, sort_offers};

pub const MAX_IMAGES_VIEW: usize = 6;
pub const MAX_NEARBY_OFFERS_VIEW: usize = 3;
pub const MAX_REVIEWS_VIEW: usize = 10;

// -- Offers -------------------------------------------------------------------

pub fn select_offers_is_loading(state: &RootState) -> bool {
    state.offers.is_loading
}

pub fn select_raw_offers(state: &RootState) -> &[Offer] {
    &state.offers.offers
}

pub fn select_location(state: &RootState) -> CityName {
    state.offers.location
}

pub fn select_sort_type(state: &RootState) -> SortType {
    state.offers.sort_type
}

/// Offers of the current city in the current order, cached.
///
/// The cached `Arc` is handed out again as long as the offers collection,
/// the location and the sort type are the same as on the previous call.
#[derive(Default)]
pub struct CityOffersSelector {
    cache: Mutex<Option<CityOffersCache>>,
}

struct CityOffersCache {
    offers: Arc<Vec<Offer>>,
    location: CityName,
    sort_type: SortType,
    result: Arc<Vec<Offer>>,
}

impl CityOffersSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, state: &RootState) -> Arc<Vec<Offer>> {
        let slice = &state.offers;
        let mut cache = self.cache.lock();

        if let Some(entry) = cache.as_ref() {
            if Arc::ptr_eq(&entry.offers, &slice.offers)
                && entry.location == slice.location
                && entry.sort_type == slice.sort_type
            {
                return Arc::clone(&entry.result);
            }
        }

        let mut offers = filter_by_city(&slice.offers, slice.location);
        sort_offers(&mut offers, slice.sort_type);
        let result = Arc::new(offers);

        *cache = Some(CityOffersCache {
            offers: Arc::clone(&slice.offers),
            location: slice.location,
            sort_type: slice.sort_type,
            result: Arc::clone(&result),
        });
        result
    }
}

// -- Offer page ---------------------------------------------------------------

pub fn select_offer(state: &RootState) -> Option<&ExtendedOffer> {
    state.offer.offer.as_ref()
}

pub fn select_offer_is_loading(state: &RootState) -> bool {
    state.offer.is_loading
}

/// Gallery images shown on the offer page.
pub fn select_offer_images(state: &RootState) -> &[String] {
    match &state.offer.offer {
        Some(offer) => &offer.images[..offer.images.len().min(MAX_IMAGES_VIEW)],
        None => &[],
    }
}

pub fn select_nearby_offers(state: &RootState) -> &[Offer] {
    &state.nearby_offers.nearby_offers
}

/// Nearby offers shown on the map and under the offer.
pub fn select_nearby_preview(state: &RootState) -> &[Offer] {
    let nearby = select_nearby_offers(state);
    &nearby[..nearby.len().min(MAX_NEARBY_OFFERS_VIEW)]
}

pub fn select_comments(state: &RootState) -> &[Comment] {
    &state.comments.comments
}

pub fn select_comments_is_loading(state: &RootState) -> bool {
    state.comments.is_loading
}

/// Newest reviews first, at most [`MAX_REVIEWS_VIEW`].
pub fn select_review_list(state: &RootState) -> Vec<&Comment> {
    let mut reviews: Vec<&Comment> = state.comments.comments.iter().collect();
    // ISO-8601 timestamps order lexicographically.
    reviews.sort_by(|a, b| b.date.cmp(&a.date));
    reviews.truncate(MAX_REVIEWS_VIEW);
    reviews
}

/// What the offer page should do for `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferRoute {
    /// Catalogue is still loading; decide once it settles.
    Waiting,
    /// Offer is known; its details can be fetched.
    Found,
    /// Offer is not in the loaded catalogue.
    NotFound,
}

pub fn select_offer_route(state: &RootState, id: &str) -> OfferRoute {
    if state.offers.is_loading {
        OfferRoute::Waiting
    } else if state.offers.offers.iter().any(|offer| offer.id == id) {
        OfferRoute::Found
    } else {
        OfferRoute::NotFound
    }
}

// -- Favorites ----------------------------------------------------------------

pub fn select_favorite_offers(state: &RootState) -> &[Offer] {
    &state.favorite_offers.favorite_offers
}

pub fn select_favorite_offers_is_loading(state: &RootState) -> bool {
    state.favorite_offers.is_loading
}

pub fn select_favorite_count(state: &RootState) -> usize {
    state.favorite_offers.favorite_offers.len()
}

/// Favorites grouped by city name, cities in order of first appearance.
pub fn select_favorites_by_city(state: &RootState) -> Vec<(String, Vec<Offer>)> {
    group_by_city(&state.favorite_offers.favorite_offers)
}

/// Request that flips the bookmark of an offer, or the route to send an
/// anonymous user to instead.
pub fn favorite_toggle_for(
    state: &RootState,
    offer_id: &str,
    is_favorite: bool,
) -> Result<FavoriteUpdate, AppRoute> {
    if !select_is_authenticated(state) {
        return Err(AppRoute::Login);
    }
    Ok(FavoriteUpdate {
        id: offer_id.to_string(),
        status: FavoriteStatus::toggle_from(is_favorite),
    })
}

// -- User ---------------------------------------------------------------------

pub fn select_user(state: &RootState) -> Option<&AuthInfo> {
    state.user.user.as_ref()
}

pub fn select_authorization_status(state: &RootState) -> AuthorizationStatus {
    state.user.authorization_status
}

pub fn select_is_authenticated(state: &RootState) -> bool {
    state.user.authorization_status == AuthorizationStatus::Auth
}

/// The shell can render once the session is known and offers settled.
pub fn select_is_app_ready(state: &RootState) -> bool {
    state.user.authorization_status != AuthorizationStatus::Unknown && !state.offers.is_loading
}
