//! HTTP access to the 6 cities REST backend.

mod client;
mod error;
mod routes;

pub use client::ApiClient;
pub use error::ApiError;
pub use routes::ApiRoute;
