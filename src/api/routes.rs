use std::fmt;

use crate::models::FavoriteStatus;

/// REST endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute<'a> {
    Offers,
    Offer(&'a str),
    NearbyOffers(&'a str),
    Favorite,
    FavoriteStatus { id: &'a str, status: FavoriteStatus },
    Comments(&'a str),
    /// Session check (`GET`) and authentication (`POST`).
    Login,
    Logout,
}

impl ApiRoute<'_> {
    pub fn path(&self) -> String {
        match self {
            ApiRoute::Offers => "/offers".to_string(),
            ApiRoute::Offer(id) => format!("/offers/{}", id),
            ApiRoute::NearbyOffers(id) => format!("/offers/{}/nearby", id),
            ApiRoute::Favorite => "/favorite".to_string(),
            ApiRoute::FavoriteStatus { id, status } => {
                format!("/favorite/{}/{}", id, status.as_flag())
            }
            ApiRoute::Comments(offer_id) => format!("/comments/{}", offer_id),
            ApiRoute::Login | ApiRoute::Logout => "/login".to_string(),
        }
    }
}

impl fmt::Display for ApiRoute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
