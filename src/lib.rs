pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod store;
pub mod token;
pub mod utils;
