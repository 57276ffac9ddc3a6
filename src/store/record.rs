//! Polygon record types.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::geometry::{Bounds, Coordinate};

/// An uploaded image, owned exclusively by its parent polygon.
#[derive(Debug, Clone)]
pub struct Image {
    pub data: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub size: i64,
}

/// A polygon as submitted by a client, validated and ready to persist.
///
/// Identity and timestamps are assigned by the store at write time.
#[derive(Debug, Clone)]
pub struct NewPolygon {
    pub title: String,
    pub description: String,
    pub coordinates: Vec<Coordinate>,
    pub bounds: Option<Bounds>,
    pub image: Option<Image>,
}

/// A persisted polygon record. Reads project out the image payload; only
/// the dedicated image fetch returns binary data.
#[derive(Debug, Clone)]
pub struct StoredPolygon {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub coordinates: Vec<Coordinate>,
    pub bounds: Option<Bounds>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
