//! Route handlers.
//!
//! # Responsibilities
//! - Parse the multipart create request (string fields + optional file)
//! - Invoke coordinate normalization and bounds derivation
//! - Invoke the polygon store and shape responses
//!
//! No business logic lives here beyond orchestration and translating
//! validation failures into `ApiError`.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::geometry::coordinate::normalize_all;
use crate::geometry::{bounds_of, Bounds, Coordinate, CoordinateInput};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::postgres::MAX_LIST_LIMIT;
use crate::store::{Image, NewPolygon, StoredPolygon};

/// Per-file cap on uploaded images.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Serialize)]
pub struct Health {
    pub ok: bool,
}

/// A polygon on the wire. The image is never included; clients fetch it
/// from the dedicated image route.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub coordinates: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PolygonResponse {
    /// Create-response shape: no `updatedAt`.
    fn created(record: StoredPolygon) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            coordinates: record.coordinates,
            bounds: record.bounds,
            created_at: record.created_at,
            updated_at: None,
        }
    }

    /// Read-response shape: includes `updatedAt`.
    fn full(record: StoredPolygon) -> Self {
        let updated_at = record.updated_at;
        let mut response = Self::created(record);
        response.updated_at = Some(updated_at);
        response
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { ok: true })
}

/// POST /polygons — create a polygon from a multipart form.
pub async fn create_polygon(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<PolygonResponse>), ApiError> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut coordinates_raw: Option<String> = None;
    let mut image: Option<Image> = None;

    while let Some(field) = multipart.next_field().await? {
        // Own the name up front; reading the field consumes it.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => title = Some(field.text().await?),
            Some("description") => description = Some(field.text().await?),
            Some("coordinates") => coordinates_raw = Some(field.text().await?),
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field.bytes().await?;
                if data.len() > MAX_IMAGE_BYTES {
                    return Err(ApiError::Validation(
                        "image exceeds the 5 MB limit".to_string(),
                    ));
                }
                if !data.is_empty() {
                    image = Some(Image {
                        size: data.len() as i64,
                        data: data.to_vec(),
                        content_type,
                        filename,
                    });
                }
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("title is required".to_string()))?;

    let description = description.map(|d| d.trim().to_string()).unwrap_or_default();

    let coordinates_raw = coordinates_raw
        .ok_or_else(|| ApiError::Validation("coordinates are required".to_string()))?;
    let inputs: Vec<CoordinateInput> = serde_json::from_str(&coordinates_raw).map_err(|_| {
        ApiError::Validation("coordinates must be a JSON array of coordinates".to_string())
    })?;
    if inputs.is_empty() {
        return Err(ApiError::Validation(
            "coordinates must not be empty".to_string(),
        ));
    }

    let coordinates = normalize_all(&inputs)?;
    let bounds = bounds_of(&coordinates);

    let stored = state
        .store
        .create(NewPolygon {
            title,
            description,
            coordinates,
            bounds,
            image,
        })
        .await?;

    tracing::info!(
        id = %stored.id,
        vertices = stored.coordinates.len(),
        "Polygon created"
    );

    Ok((StatusCode::CREATED, Json(PolygonResponse::created(stored))))
}

/// GET /polygons — newest first, capped, images excluded.
pub async fn list_polygons(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolygonResponse>>, ApiError> {
    let records = state.store.list_recent(MAX_LIST_LIMIT).await?;
    Ok(Json(records.into_iter().map(PolygonResponse::full).collect()))
}

/// GET /polygons/{id} — single record, image excluded.
pub async fn get_polygon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PolygonResponse>, ApiError> {
    let record = state
        .store
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(PolygonResponse::full(record)))
}

/// GET /polygons/{id}/image — the stored binary, with its content type.
pub async fn get_polygon_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let image = state
        .store
        .get_image_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let content_type = if image.content_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        image.content_type
    };

    Ok(([(header::CONTENT_TYPE, content_type)], image.data).into_response())
}
