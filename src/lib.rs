//! Polygon API Library

pub mod config;
pub mod geometry;
pub mod http;
pub mod store;

pub use config::AppConfig;
pub use http::ApiServer;
pub use store::PolygonStore;
