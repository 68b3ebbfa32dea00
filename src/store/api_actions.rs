//! Async actions: HTTP calls wrapped in pending/fulfilled/rejected events.
//!
//! Every public method dispatches `pending` before its first await and
//! exactly one terminal event when the request settles. The returned
//! `Result` mirrors the terminal event so callers can await the outcome
//! without reading the store.

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{Instrument, Span};
use uuid::Uuid;

use crate::api::{ApiClient, ApiRoute};
use crate::models::{
    AppRoute, AuthCredentials, AuthInfo, AuthorizationStatus, Comment, CommentDraft,
    ExtendedOffer, FavoriteUpdate, Offer,
};
use crate::store::action::{Action, ActionError, Lifecycle};
use crate::store::dispatch::Dispatch;
use crate::store::root::RootState;
use crate::store::selectors::{select_offer_route, OfferRoute};
use crate::token::TokenStore;

/// Outcome of [`AsyncActions::load_offer_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferPageLoad {
    /// Catalogue still loading; nothing was requested.
    NotReady,
    /// Offer, comments and nearby offers were requested.
    Loaded,
    /// The id is not in the catalogue; show the not-found page.
    NotFound,
}

/// `POST /comments/{id}` answers either the new comment or the full list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedComments {
    Many(Vec<Comment>),
    One(Comment),
}

impl CreatedComments {
    fn into_vec(self) -> Vec<Comment> {
        match self {
            CreatedComments::Many(comments) => comments,
            CreatedComments::One(comment) => vec![comment],
        }
    }
}

type Wrap<T> = fn(Lifecycle<T>) -> Action;

/// The named async operations of the application.
///
/// Cheap to clone; clones share the client, token store and dispatcher.
/// Invocations are independent: nothing is deduplicated or cancelled.
#[derive(Clone)]
pub struct AsyncActions {
    client: ApiClient,
    tokens: Arc<dyn TokenStore>,
    dispatcher: Arc<dyn Dispatch>,
}

impl AsyncActions {
    pub fn new(
        client: ApiClient,
        tokens: Arc<dyn TokenStore>,
        dispatcher: Arc<dyn Dispatch>,
    ) -> Self {
        Self {
            client,
            tokens,
            dispatcher,
        }
    }

    pub async fn get_offers(&self) -> Result<Vec<Offer>, ActionError> {
        self.run(Action::GetOffers, self.fetch_offers()).await
    }

    pub async fn get_offer(&self, id: &str) -> Result<ExtendedOffer, ActionError> {
        let request = self.client.get::<ExtendedOffer>(ApiRoute::Offer(id));
        self.run(Action::GetOffer, async { request.await.map_err(ActionError::from) })
            .await
    }

    pub async fn get_nearby_offers(&self, id: &str) -> Result<Vec<Offer>, ActionError> {
        let request = self.client.get::<Vec<Offer>>(ApiRoute::NearbyOffers(id));
        self.run(Action::GetNearbyOffers, async { request.await.map_err(ActionError::from) })
            .await
    }

    pub async fn get_favorite_offers(&self) -> Result<Vec<Offer>, ActionError> {
        let request = self.client.get::<Vec<Offer>>(ApiRoute::Favorite);
        self.run(Action::GetFavoriteOffers, async { request.await.map_err(ActionError::from) })
            .await
    }

    /// Set the favorite flag of an offer; resolves to the updated offer.
    pub async fn update_favorite_offer(&self, update: FavoriteUpdate) -> Result<Offer, ActionError> {
        let route = ApiRoute::FavoriteStatus {
            id: &update.id,
            status: update.status,
        };
        let request = self.client.post::<Offer>(route);
        self.run(Action::UpdateFavoriteOffer, async { request.await.map_err(ActionError::from) })
            .await
    }

    pub async fn get_comments(&self, offer_id: &str) -> Result<Vec<Comment>, ActionError> {
        let request = self.client.get::<Vec<Comment>>(ApiRoute::Comments(offer_id));
        self.run(Action::GetComments, async { request.await.map_err(ActionError::from) })
            .await
    }

    /// Post a review. The draft is sent as given; only the HTTP outcome
    /// decides how the action settles.
    pub async fn create_comment(&self, draft: CommentDraft) -> Result<Vec<Comment>, ActionError> {
        self.run(Action::CreateComment, self.post_comment(&draft)).await
    }

    /// Restore the session from the stored token.
    ///
    /// Without a token this rejects immediately and sends nothing. Any
    /// failure of the session check drops the stored token, since the
    /// rejection moves the user to `NoAuth`.
    pub async fn check_auth(&self) -> Result<AuthInfo, ActionError> {
        self.run(Action::CheckAuth, self.fetch_session()).await
    }

    /// Authenticate, persist the token and ask for the home page.
    ///
    /// A failed attempt also drops any token left from an earlier session.
    pub async fn login(&self, credentials: AuthCredentials) -> Result<AuthInfo, ActionError> {
        self.run(Action::Login, self.authenticate(&credentials)).await
    }

    /// End the session.
    ///
    /// On success the per-user data is dropped and the catalogue is
    /// refetched anonymously. The refetch settles on its own task, after
    /// this action has been fulfilled.
    pub async fn logout(&self) -> Result<(), ActionError> {
        let span = self.begin(Action::Logout);
        let result = self
            .client
            .delete(ApiRoute::Logout)
            .instrument(span.clone())
            .await
            .map_err(ActionError::from);

        if result.is_ok() {
            self.dispatcher.dispatch(Action::ClearOffers);
            self.dispatcher.dispatch(Action::ClearFavoriteOffers);
            // Dropped before the refetch task is spawned so it goes out anonymous.
            self.tokens.remove_token();
            self.spawn_get_offers();
        }

        span.in_scope(|| self.settle(Action::Logout, result))
    }

    /// Start-up sequence of the application shell.
    ///
    /// Session check and catalogue load run concurrently; favorites are
    /// fetched once the user is known to be authenticated.
    pub async fn bootstrap(&self) -> AuthorizationStatus {
        let (auth, _) = tokio::join!(self.check_auth(), self.get_offers());
        if auth.is_err() {
            return AuthorizationStatus::NoAuth;
        }

        // Failure is already recorded in the favorites slice.
        let _ = self.get_favorite_offers().await;
        AuthorizationStatus::Auth
    }

    /// Fetch everything the offer page shows for `id`.
    ///
    /// `snapshot` is the state the decision is made on; ids missing from
    /// the loaded catalogue never reach the network.
    pub async fn load_offer_page(&self, snapshot: &RootState, id: &str) -> OfferPageLoad {
        match select_offer_route(snapshot, id) {
            OfferRoute::Waiting => OfferPageLoad::NotReady,
            OfferRoute::NotFound => OfferPageLoad::NotFound,
            OfferRoute::Found => {
                let _ = tokio::join!(
                    self.get_offer(id),
                    self.get_comments(id),
                    self.get_nearby_offers(id)
                );
                OfferPageLoad::Loaded
            }
        }
    }

    async fn fetch_offers(&self) -> Result<Vec<Offer>, ActionError> {
        Ok(self.client.get::<Vec<Offer>>(ApiRoute::Offers).await?)
    }

    async fn post_comment(&self, draft: &CommentDraft) -> Result<Vec<Comment>, ActionError> {
        let created: CreatedComments = self
            .client
            .post_json(ApiRoute::Comments(&draft.offer_id), &draft.payload())
            .await?;
        Ok(created.into_vec())
    }

    async fn fetch_session(&self) -> Result<AuthInfo, ActionError> {
        if self.tokens.get_token().is_empty() {
            return Err(ActionError::NoSession);
        }

        let result = self.client.get::<AuthInfo>(ApiRoute::Login).await;
        if result.is_err() {
            self.tokens.remove_token();
        }
        Ok(result?)
    }

    async fn authenticate(&self, credentials: &AuthCredentials) -> Result<AuthInfo, ActionError> {
        let info: AuthInfo = match self.client.post_json(ApiRoute::Login, credentials).await {
            Ok(info) => info,
            Err(err) => {
                self.tokens.remove_token();
                return Err(err.into());
            }
        };
        self.tokens.set_token(info.token.expose());
        self.dispatcher
            .dispatch(Action::RedirectToRoute(AppRoute::Home));
        Ok(info)
    }

    /// Emit `getOffers.pending` now and settle on a separate task.
    fn spawn_get_offers(&self) {
        let span = self.begin(Action::GetOffers);
        let this = self.clone();
        tokio::spawn(
            async move {
                let result = this.fetch_offers().await;
                this.settle(Action::GetOffers, result);
            }
            .instrument(span),
        );
    }

    async fn run<T, F>(&self, wrap: Wrap<T>, work: F) -> Result<T, ActionError>
    where
        T: Clone,
        F: Future<Output = Result<T, ActionError>>,
    {
        let span = self.begin(wrap);
        let result = work.instrument(span.clone()).await;
        span.in_scope(|| self.settle(wrap, result))
    }

    fn begin<T>(&self, wrap: Wrap<T>) -> Span {
        let action = wrap(Lifecycle::Pending);
        let span = tracing::debug_span!(
            "action",
            action = action.kind().name(),
            request_id = %Uuid::new_v4()
        );
        span.in_scope(|| tracing::debug!("Pending"));
        self.dispatcher.dispatch(action);
        span
    }

    fn settle<T: Clone>(&self, wrap: Wrap<T>, result: Result<T, ActionError>) -> Result<T, ActionError> {
        match &result {
            Ok(payload) => {
                tracing::debug!("Fulfilled");
                self.dispatcher
                    .dispatch(wrap(Lifecycle::Fulfilled(payload.clone())));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rejected");
                self.dispatcher.dispatch(wrap(Lifecycle::Rejected(err.clone())));
            }
        }
        result
    }
}
