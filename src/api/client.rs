use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::routes::ApiRoute;
use crate::config::ApiConfig;
use crate::token::TokenStore;

/// Thin wrapper over reqwest bound to one backend.
///
/// Every outgoing request carries the session token header when the token
/// store holds a token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token_header: HeaderName,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        let token_header = HeaderName::from_bytes(config.token_header.trim().as_bytes())
            .map_err(|e| ApiError::Build(format!("invalid token header: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_header,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, route: ApiRoute<'_>) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, &route), &route).await?;
        decode(response, &route).await
    }

    /// `POST` without a body.
    pub async fn post<T: DeserializeOwned>(&self, route: ApiRoute<'_>) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::POST, &route), &route).await?;
        decode(response, &route).await
    }

    pub async fn post_json<B, T>(&self, route: ApiRoute<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, &route).json(body);
        let response = self.execute(builder, &route).await?;
        decode(response, &route).await
    }

    /// `DELETE`, discarding whatever body comes back.
    pub async fn delete(&self, route: ApiRoute<'_>) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &route), &route)
            .await
            .map(|_| ())
    }

    fn request(&self, method: Method, route: &ApiRoute<'_>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, route.path());
        let mut builder = self.http.request(method, url);

        let token = self.tokens.get_token();
        if !token.is_empty() {
            match HeaderValue::from_str(&token) {
                Ok(value) => builder = builder.header(self.token_header.clone(), value),
                Err(_) => tracing::warn!("Stored token is not a valid header value, sending without it"),
            }
        }

        builder
    }

    async fn execute(
        &self,
        builder: RequestBuilder,
        route: &ApiRoute<'_>,
    ) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Transport {
            path: route.path(),
            source: e,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            path: route.path(),
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response, route: &ApiRoute<'_>) -> Result<T, ApiError> {
    let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
        path: route.path(),
        source: e,
    })?;

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
        path: route.path(),
        source: e,
    })
}
