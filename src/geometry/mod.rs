//! Coordinate handling.
//!
//! # Data Flow
//! ```text
//! raw request value (object or pair)
//!     → coordinate.rs (normalize to canonical {lat, lng})
//!     → bounds.rs (derive axis-aligned bounding box)
//!     → store (persisted alongside the polygon record)
//! ```
//!
//! Everything in this module is pure; validation failures surface as
//! `GeometryError` and are translated to HTTP 400 at the handler boundary.

pub mod bounds;
pub mod coordinate;

pub use bounds::{bounds_of, Bounds};
pub use coordinate::{Coordinate, CoordinateInput, GeometryError};
