//! PostgreSQL-backed polygon store.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use uuid::Uuid;

use crate::geometry::{Bounds, Coordinate};
use crate::store::record::{Image, NewPolygon, StoredPolygon};

/// Hard cap on the number of records a listing returns.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database call failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence handle over a shared connection pool.
///
/// Cloning is cheap; the pool is internally synchronized and safe for
/// concurrent use across request handlers.
#[derive(Clone)]
pub struct PolygonStore {
    pool: PgPool,
}

/// Read projection of a polygon row, image excluded.
#[derive(FromRow)]
struct PolygonRow {
    id: Uuid,
    title: String,
    description: String,
    coordinates: Json<Vec<Coordinate>>,
    bounds: Option<Json<Bounds>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PolygonRow> for StoredPolygon {
    fn from(row: PolygonRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            coordinates: row.coordinates.0,
            bounds: row.bounds.map(|b| b.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct ImageRow {
    image_data: Option<Vec<u8>>,
    image_content_type: Option<String>,
    image_filename: Option<String>,
    image_size: Option<i64>,
}

impl PolygonStore {
    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect eagerly, verifying the database is reachable.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        Ok(Self { pool })
    }

    /// Build a pool without connecting. Connections are established on
    /// first use; requests that never reach the database never connect.
    /// The short acquire timeout makes an unreachable database fail fast
    /// instead of retrying for the pool default of 30 seconds.
    pub fn connect_lazy(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .connect_lazy(url)?;
        Ok(Self { pool })
    }

    /// Create the backing table and recency index if they do not exist.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS polygons (
                id UUID PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                coordinates JSONB NOT NULL,
                bounds JSONB,
                image_data BYTEA,
                image_content_type TEXT,
                image_filename TEXT,
                image_size BIGINT,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS polygons_created_at_idx \
             ON polygons (created_at DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist a new polygon, assigning its identifier and timestamps.
    pub async fn create(&self, record: NewPolygon) -> StoreResult<StoredPolygon> {
        let id = Uuid::new_v4();
        // Explicit write-path timestamps; updated_at is refreshed on every
        // persistence write.
        let now = Utc::now();

        let (image_data, image_content_type, image_filename, image_size) = match &record.image {
            Some(img) => (
                Some(img.data.as_slice()),
                Some(img.content_type.as_str()),
                Some(img.filename.as_str()),
                Some(img.size),
            ),
            None => (None, None, None, None),
        };

        sqlx::query(
            r#"
            INSERT INTO polygons
                (id, title, description, coordinates, bounds,
                 image_data, image_content_type, image_filename, image_size,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(Json(&record.coordinates))
        .bind(record.bounds.as_ref().map(Json))
        .bind(image_data)
        .bind(image_content_type)
        .bind(image_filename)
        .bind(image_size)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(StoredPolygon {
            id,
            title: record.title,
            description: record.description,
            coordinates: record.coordinates,
            bounds: record.bounds,
            created_at: now,
            updated_at: now,
        })
    }

    /// Most recent polygons, newest first, image excluded. `limit` is
    /// clamped to [`MAX_LIST_LIMIT`].
    pub async fn list_recent(&self, limit: i64) -> StoreResult<Vec<StoredPolygon>> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);

        let rows: Vec<PolygonRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, coordinates, bounds,
                   created_at, updated_at
            FROM polygons
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredPolygon::from).collect())
    }

    /// Fetch a single polygon, image excluded. `Ok(None)` for unknown ids.
    pub async fn get_by_id(&self, id: Uuid) -> StoreResult<Option<StoredPolygon>> {
        let row: Option<PolygonRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, coordinates, bounds,
                   created_at, updated_at
            FROM polygons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredPolygon::from))
    }

    /// Fetch only the image sub-record for a polygon. `Ok(None)` when the
    /// polygon does not exist or carries no image.
    pub async fn get_image_by_id(&self, id: Uuid) -> StoreResult<Option<Image>> {
        let row: Option<ImageRow> = sqlx::query_as(
            r#"
            SELECT image_data, image_content_type, image_filename, image_size
            FROM polygons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let Some(data) = row.image_data else {
            return Ok(None);
        };

        let size = row.image_size.unwrap_or(data.len() as i64);
        Ok(Some(Image {
            data,
            content_type: row
                .image_content_type
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            filename: row.image_filename.unwrap_or_default(),
            size,
        }))
    }
}
