//! Everything that can be dispatched into the store.
//!
//! Async actions are modelled as one variant per operation carrying a
//! [`Lifecycle`]; synchronous commands are plain variants.

use std::fmt;

use thiserror::Error;

use crate::api::ApiError;
use crate::models::{AppRoute, AuthInfo, CityName, Comment, ExtendedOffer, Offer, SortType};
use crate::store::mvi::Intent;

/// Progress marker of an async action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Pending,
    Fulfilled,
    Rejected,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::Fulfilled => "fulfilled",
            Phase::Rejected => "rejected",
        }
    }
}

/// One lifecycle event of one async action invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    Pending,
    Fulfilled(T),
    Rejected(ActionError),
}

impl<T> Lifecycle<T> {
    pub fn phase(&self) -> Phase {
        match self {
            Lifecycle::Pending => Phase::Pending,
            Lifecycle::Fulfilled(_) => Phase::Fulfilled,
            Lifecycle::Rejected(_) => Phase::Rejected,
        }
    }

    /// Whether this event ends the invocation.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Lifecycle::Pending)
    }
}

/// Detail carried by a rejected event.
///
/// Slices never branch on it; it exists for logging and for the caller that
/// awaited the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("no active session")]
    NoSession,
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status {
                status, message, ..
            } => ActionError::Http { status, message },
            ApiError::Decode { .. } => ActionError::Decode(err.to_string()),
            ApiError::Transport { .. } | ApiError::Build(_) => ActionError::Network(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GetOffers(Lifecycle<Vec<Offer>>),
    GetOffer(Lifecycle<ExtendedOffer>),
    GetNearbyOffers(Lifecycle<Vec<Offer>>),
    GetFavoriteOffers(Lifecycle<Vec<Offer>>),
    UpdateFavoriteOffer(Lifecycle<Offer>),
    GetComments(Lifecycle<Vec<Comment>>),
    /// The backend may answer with the new comment alone or with a list.
    CreateComment(Lifecycle<Vec<Comment>>),
    CheckAuth(Lifecycle<AuthInfo>),
    Login(Lifecycle<AuthInfo>),
    Logout(Lifecycle<()>),
    ChangeLocation(CityName),
    ChangeSortType(SortType),
    ClearOffers,
    ClearFavoriteOffers,
    RedirectToRoute(AppRoute),
}

impl Intent for Action {}

/// Payload-free identity of an [`Action`], handy for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    GetOffers(Phase),
    GetOffer(Phase),
    GetNearbyOffers(Phase),
    GetFavoriteOffers(Phase),
    UpdateFavoriteOffer(Phase),
    GetComments(Phase),
    CreateComment(Phase),
    CheckAuth(Phase),
    Login(Phase),
    Logout(Phase),
    ChangeLocation,
    ChangeSortType,
    ClearOffers,
    ClearFavoriteOffers,
    RedirectToRoute,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::GetOffers(l) => ActionKind::GetOffers(l.phase()),
            Action::GetOffer(l) => ActionKind::GetOffer(l.phase()),
            Action::GetNearbyOffers(l) => ActionKind::GetNearbyOffers(l.phase()),
            Action::GetFavoriteOffers(l) => ActionKind::GetFavoriteOffers(l.phase()),
            Action::UpdateFavoriteOffer(l) => ActionKind::UpdateFavoriteOffer(l.phase()),
            Action::GetComments(l) => ActionKind::GetComments(l.phase()),
            Action::CreateComment(l) => ActionKind::CreateComment(l.phase()),
            Action::CheckAuth(l) => ActionKind::CheckAuth(l.phase()),
            Action::Login(l) => ActionKind::Login(l.phase()),
            Action::Logout(l) => ActionKind::Logout(l.phase()),
            Action::ChangeLocation(_) => ActionKind::ChangeLocation,
            Action::ChangeSortType(_) => ActionKind::ChangeSortType,
            Action::ClearOffers => ActionKind::ClearOffers,
            Action::ClearFavoriteOffers => ActionKind::ClearFavoriteOffers,
            Action::RedirectToRoute(_) => ActionKind::RedirectToRoute,
        }
    }
}

impl ActionKind {
    /// Action name without the lifecycle phase, e.g. `offers/getOffers`.
    pub fn name(&self) -> &'static str {
        self.parts().0
    }

    fn parts(&self) -> (&'static str, Option<Phase>) {
        match *self {
            ActionKind::GetOffers(p) => ("offers/getOffers", Some(p)),
            ActionKind::GetOffer(p) => ("offer/getOffer", Some(p)),
            ActionKind::GetNearbyOffers(p) => ("nearbyOffers/getNearbyOffers", Some(p)),
            ActionKind::GetFavoriteOffers(p) => ("favoriteOffers/getFavoriteOffers", Some(p)),
            ActionKind::UpdateFavoriteOffer(p) => ("favoriteOffers/updateFavoriteOffer", Some(p)),
            ActionKind::GetComments(p) => ("comments/getComments", Some(p)),
            ActionKind::CreateComment(p) => ("comments/createComment", Some(p)),
            ActionKind::CheckAuth(p) => ("user/checkAuth", Some(p)),
            ActionKind::Login(p) => ("user/login", Some(p)),
            ActionKind::Logout(p) => ("user/logout", Some(p)),
            ActionKind::ChangeLocation => ("offers/changeLocation", None),
            ActionKind::ChangeSortType => ("offers/changeSortType", None),
            ActionKind::ClearOffers => ("offers/clearOffers", None),
            ActionKind::ClearFavoriteOffers => ("favoriteOffers/clearFavoriteOffers", None),
            ActionKind::RedirectToRoute => ("app/redirectToRoute", None),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts() {
            (name, Some(phase)) => write!(f, "{}/{}", name, phase.as_str()),
            (name, None) => f.write_str(name),
        }
    }
}
