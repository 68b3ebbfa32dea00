use std::fmt;

use serde::{Deserialize, Serialize};

/// Housing category of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Apartment,
    Room,
    House,
    Hotel,
}

impl OfferType {
    pub fn label(&self) -> &'static str {
        match self {
            OfferType::Apartment => "Apartment",
            OfferType::Room => "Private Room",
            OfferType::House => "House",
            OfferType::Hotel => "Hotel",
        }
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub location: Location,
}

/// Offer summary as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub price: u32,
    pub city: City,
    pub location: Location,
    pub is_favorite: bool,
    pub is_premium: bool,
    pub rating: f64,
    /// Absent from the toggle-favorite response, which returns a full offer.
    #[serde(default)]
    pub preview_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
}

/// Full offer description, produced only by the single-offer endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedOffer {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub price: u32,
    pub city: City,
    pub location: Location,
    pub is_favorite: bool,
    pub is_premium: bool,
    pub rating: f64,
    pub description: String,
    pub bedrooms: u32,
    pub max_adults: u32,
    pub goods: Vec<String>,
    pub host: Host,
    pub images: Vec<String>,
}

/// Requested favorite state, sent as `1` or `0` in the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStatus {
    Favorite,
    NotFavorite,
}

impl FavoriteStatus {
    pub fn as_flag(&self) -> u8 {
        match self {
            FavoriteStatus::Favorite => 1,
            FavoriteStatus::NotFavorite => 0,
        }
    }

    /// Status that flips the current favorite flag.
    pub fn toggle_from(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteStatus::NotFavorite
        } else {
            FavoriteStatus::Favorite
        }
    }
}

/// Input of the toggle-favorite action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteUpdate {
    pub id: String,
    pub status: FavoriteStatus,
}
