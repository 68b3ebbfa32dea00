use std::fmt;

use serde::{Deserialize, Serialize};

/// Public profile of a user, as embedded in comments and hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
}

/// Opaque session credential.
///
/// The inner value is never exposed via Debug or Display.
/// Use `expose()` when the value has to be persisted or sent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(••••••••)")
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "••••••••")
    }
}

/// Authenticated user as returned by `GET /login` and `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthInfo {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
    pub email: String,
    pub token: SessionToken,
}

impl AuthInfo {
    pub fn profile(&self) -> User {
        User {
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
            is_pro: self.is_pro,
        }
    }
}

/// Body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("email", &self.email)
            .field("password", &"••••••••")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    Auth,
    NoAuth,
    /// Session check has not settled yet.
    #[default]
    Unknown,
}
