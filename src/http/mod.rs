//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, body limits)
//!     → handlers.rs (parse multipart/path, validate, call the store)
//!     → error.rs (map failures to status codes)
//!     → JSON (or binary image) response
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{ApiServer, AppState};
