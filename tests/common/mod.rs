//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use six_cities::api::ApiClient;
use six_cities::config::ApiConfig;
use six_cities::models::{AuthInfo, Comment, ExtendedOffer, Offer};
use six_cities::store::{ActionKind, AsyncActions, Dispatch, Store};
use six_cities::token::{MemoryTokenStore, TokenStore};

use mock_backend::MockBackend;

// -- Fixtures -----------------------------------------------------------------

pub fn offer_json(id: &str, city: &str, is_favorite: bool) -> Value {
    json!({
        "id": id,
        "title": format!("Offer {}", id),
        "type": "apartment",
        "price": 120,
        "city": {
            "name": city,
            "location": { "latitude": 52.370216, "longitude": 4.895168, "zoom": 10 }
        },
        "location": { "latitude": 52.3609553943508, "longitude": 4.85309666406198, "zoom": 8 },
        "isFavorite": is_favorite,
        "isPremium": false,
        "rating": 4.0,
        "previewImage": "https://url-to-image/image.png"
    })
}

pub fn extended_offer_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Beautiful & luxurious studio at great location",
        "type": "apartment",
        "price": 120,
        "city": {
            "name": "Amsterdam",
            "location": { "latitude": 52.370216, "longitude": 4.895168, "zoom": 10 }
        },
        "location": { "latitude": 52.35514938496378, "longitude": 4.673877537499948, "zoom": 8 },
        "isFavorite": false,
        "isPremium": false,
        "rating": 4.0,
        "description": "A quiet cozy and picturesque that hides behind a a river by the unique lightness of Amsterdam.",
        "bedrooms": 3,
        "goods": ["Heating"],
        "host": { "name": "Oliver Conner", "avatarUrl": "https://url-to-image/image.png", "isPro": false },
        "images": ["https://url-to-image/image.png"],
        "maxAdults": 4
    })
}

pub fn comment_json(id: &str, date: &str) -> Value {
    json!({
        "id": id,
        "date": date,
        "user": { "name": "Oliver Conner", "avatarUrl": "https://url-to-image/image.png", "isPro": false },
        "comment": "A quiet cozy and picturesque that hides behind a a river by the unique lightness of Amsterdam.",
        "rating": 4
    })
}

pub fn auth_info_json(token: &str) -> Value {
    json!({
        "name": "Oliver Conner",
        "avatarUrl": "https://url-to-image/image.png",
        "isPro": false,
        "email": "Oliver.conner@gmail.com",
        "token": token
    })
}

pub fn offer(id: &str, city: &str, is_favorite: bool) -> Offer {
    serde_json::from_value(offer_json(id, city, is_favorite)).unwrap()
}

pub fn extended_offer(id: &str) -> ExtendedOffer {
    serde_json::from_value(extended_offer_json(id)).unwrap()
}

pub fn comment(id: &str, date: &str) -> Comment {
    serde_json::from_value(comment_json(id, date)).unwrap()
}

pub fn auth_info(token: &str) -> AuthInfo {
    serde_json::from_value(auth_info_json(token)).unwrap()
}

// -- Token store spy ----------------------------------------------------------

/// In-memory token store that counts every call.
#[derive(Default)]
pub struct CountingTokenStore {
    inner: MemoryTokenStore,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
    pub removes: AtomicUsize,
}

impl CountingTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            inner: MemoryTokenStore::with_token(token),
            ..Self::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    /// Current token without counting a read.
    pub fn peek(&self) -> String {
        self.inner.get_token()
    }
}

impl TokenStore for CountingTokenStore {
    fn get_token(&self) -> String {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get_token()
    }

    fn set_token(&self, token: &str) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set_token(token);
    }

    fn remove_token(&self) {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove_token();
    }
}

// -- Harness ------------------------------------------------------------------

/// Store, async actions and a mock backend wired together.
pub struct Harness {
    pub backend: MockBackend,
    pub store: Arc<Store>,
    pub actions: AsyncActions,
    pub tokens: Arc<CountingTokenStore>,
    recorded: Arc<Mutex<Vec<ActionKind>>>,
}

impl Harness {
    pub async fn start() -> Self {
        Self::with_tokens(CountingTokenStore::default()).await
    }

    pub async fn with_token(token: &str) -> Self {
        Self::with_tokens(CountingTokenStore::with_token(token)).await
    }

    async fn with_tokens(tokens: CountingTokenStore) -> Self {
        let backend = MockBackend::start().await;
        let tokens = Arc::new(tokens);

        let config = ApiConfig {
            base_url: backend.base_url(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, Arc::clone(&tokens) as Arc<dyn TokenStore>).unwrap();

        let store = Arc::new(Store::new());
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&recorded);
        store.subscribe(move |action, _| sink.lock().push(action.kind()));

        let actions = AsyncActions::new(
            client,
            Arc::clone(&tokens) as Arc<dyn TokenStore>,
            Arc::clone(&store) as Arc<dyn Dispatch>,
        );

        Self {
            backend,
            store,
            actions,
            tokens,
            recorded,
        }
    }

    /// Dispatched action types, e.g. `offers/getOffers/pending`.
    pub fn dispatched(&self) -> Vec<String> {
        self.recorded.lock().iter().map(|k| k.to_string()).collect()
    }

    /// Wait until an action of type `kind` has been dispatched.
    pub async fn wait_for(&self, kind: &str) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while !self.dispatched().iter().any(|k| k == kind) {
            assert!(
                tokio::time::Instant::now() < deadline,
                "timed out waiting for {}, saw {:?}",
                kind,
                self.dispatched()
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}
