pub mod api;
pub mod config;
pub mod fetch_error;
pub mod fetcher;
pub mod transform;
