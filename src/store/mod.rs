//! Application store: actions, slice reducers, selectors and async actions.
//!
//! # Architecture
//!
//! ```text
//! AsyncActions ──dispatch──→ Store ──RootReducer──→ RootState
//!      │                       │                       │
//!      └── ApiClient           └── subscribers         └── selectors
//! ```

mod action;
mod api_actions;
mod comments;
mod dispatch;
mod favorite_offers;
pub mod mvi;
mod nearby_offers;
mod offer;
mod offers;
mod root;
pub mod selectors;
mod user;

pub use action::{Action, ActionError, ActionKind, Lifecycle, Phase};
pub use api_actions::{AsyncActions, OfferPageLoad};
pub use comments::{CommentsReducer, CommentsState};
pub use dispatch::{ActionReceiver, ActionSender, Dispatch, Store};
pub use favorite_offers::{FavoriteOffersReducer, FavoriteOffersState};
pub use nearby_offers::{NearbyOffersReducer, NearbyOffersState};
pub use offer::{OfferReducer, OfferState};
pub use offers::{OffersReducer, OffersState};
pub use root::{RootReducer, RootState};
pub use user::{UserReducer, UserState};
