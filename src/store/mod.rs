//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! handler builds NewPolygon
//!     → postgres.rs (assign id + timestamps, single INSERT)
//!     → StoredPolygon returned to the handler
//!
//! reads:
//!     list_recent / get_by_id project out the image payload
//!     get_image_by_id fetches only the image sub-record
//! ```
//!
//! # Design Decisions
//! - Narrow repository surface: `create`, `list_recent`, `get_by_id`,
//!   `get_image_by_id`. Nothing else touches SQL.
//! - "Not found" is `Ok(None)`, never an error; `StoreError` means the
//!   database itself failed.
//! - Timestamps are set explicitly on the write path, not by the database.

pub mod postgres;
pub mod record;

pub use postgres::{PolygonStore, StoreError};
pub use record::{Image, NewPolygon, StoredPolygon};
