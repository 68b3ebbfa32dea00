//! Domain records exchanged with the REST backend.
//!
//! Every entity is an explicit record type. JSON uses camelCase field names,
//! conversion happens once at the API boundary through serde.

mod city;
mod comment;
mod offer;
mod route;
mod user;

pub use city::{CityName, SortType, CITIES, SORT_TYPES};
pub use comment::{
    Comment, CommentDraft, CommentPayload, DraftError, MAX_COMMENT_LENGTH, MAX_RATING, MIN_COMMENT_LENGTH,
    MIN_RATING,
};
pub use offer::{
    City, ExtendedOffer, FavoriteStatus, FavoriteUpdate, Host, Location, Offer, OfferType,
};
pub use route::AppRoute;
pub use user::{AuthCredentials, AuthInfo, AuthorizationStatus, SessionToken, User};
