//! Small pure helpers shared by reducers and selectors.

use std::sync::Arc;

use crate::models::{CityName, Offer, SortType};

/// Offers located in `city`, in their original order.
pub fn filter_by_city(offers: &[Offer], city: CityName) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| offer.city.name == city.as_str())
        .cloned()
        .collect()
}

/// Stable in-place sort. `Popular` keeps server order.
pub fn sort_offers(offers: &mut [Offer], sort_type: SortType) {
    match sort_type {
        SortType::Popular => {}
        SortType::PriceLowToHigh => offers.sort_by_key(|offer| offer.price),
        SortType::PriceHighToLow => offers.sort_by(|a, b| b.price.cmp(&a.price)),
        SortType::TopRatedFirst => offers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Star-bar width for a rating on the 0..=5 scale, e.g. `4` → `"80%"`.
pub fn rating_percent(rating: f64) -> String {
    let stars = rating.round().clamp(0.0, 5.0);
    format!("{}%", (stars * 20.0) as u32)
}

/// Group offers by city name, cities in order of first appearance.
pub fn group_by_city(offers: &[Offer]) -> Vec<(String, Vec<Offer>)> {
    let mut groups: Vec<(String, Vec<Offer>)> = Vec::new();
    for offer in offers {
        match groups.iter_mut().find(|(name, _)| *name == offer.city.name) {
            Some((_, group)) => group.push(offer.clone()),
            None => groups.push((offer.city.name.clone(), vec![offer.clone()])),
        }
    }
    groups
}

/// Replace the entry with the same id as `offer`, keeping its position.
///
/// Returns false and leaves `offers` untouched (same allocation) when no
/// entry matches.
pub fn replace_by_id(offers: &mut Arc<Vec<Offer>>, offer: &Offer) -> bool {
    let Some(index) = offers.iter().position(|item| item.id == offer.id) else {
        return false;
    };
    Arc::make_mut(offers)[index] = offer.clone();
    true
}
