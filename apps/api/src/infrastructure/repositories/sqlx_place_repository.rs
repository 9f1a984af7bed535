use super::like_pattern;
use crate::domain::{
    place::{
        entity::{NewPlace, Place},
        repository::PlaceRepository,
        value_objects::ArchitecturalStyle,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

const PLACE_COLUMNS: &str = "id, name, deity, architectural_style, founding_year, narrative, \
     location_address, latitude, longitude, contributor_name, created_at";

#[derive(FromRow)]
struct PlaceRow {
    id: Uuid,
    name: String,
    deity: Option<String>,
    architectural_style: String,
    founding_year: Option<i32>,
    narrative: Option<String>,
    location_address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    contributor_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<PlaceRow> for Place {
    fn from(r: PlaceRow) -> Self {
        let architectural_style = r.architectural_style.parse().unwrap_or_else(|_| {
            warn!(id = %r.id, style = %r.architectural_style, "unrecognised style in store");
            ArchitecturalStyle::Unknown
        });

        Place {
            id: r.id,
            name: r.name,
            deity: r.deity,
            architectural_style,
            founding_year: r.founding_year,
            narrative: r.narrative,
            location_address: r.location_address,
            latitude: r.latitude,
            longitude: r.longitude,
            contributor_name: r.contributor_name,
            created_at: r.created_at,
        }
    }
}

pub struct SqlxPlaceRepository {
    pool: PgPool,
}

impl SqlxPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxPlaceRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for SqlxPlaceRepository {
    #[instrument(skip(self, place), fields(name = %place.name))]
    async fn insert(&self, place: &NewPlace) -> Result<Uuid, DomainError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO places (name, deity, architectural_style, founding_year, narrative,
                                   location_address, latitude, longitude, contributor_name)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               RETURNING id"#,
        )
        .bind(&place.name)
        .bind(&place.deity)
        .bind(place.architectural_style.as_str())
        .bind(place.founding_year)
        .bind(&place.narrative)
        .bind(&place.location_address)
        .bind(place.latitude)
        .bind(place.longitude)
        .bind(&place.contributor_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to insert place: {}", e);
            DomainError::InfrastructureError(format!("Failed to save place: {}", e))
        })?;

        info!(%id, "place inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self, search: Option<String>) -> Result<Vec<Place>, DomainError> {
        let rows = match search.as_deref().map(like_pattern) {
            Some(pattern) => {
                sqlx::query_as::<_, PlaceRow>(&format!(
                    r#"SELECT {PLACE_COLUMNS} FROM places
                       WHERE name ILIKE $1 ESCAPE '\'
                          OR narrative ILIKE $1 ESCAPE '\'
                          OR location_address ILIKE $1 ESCAPE '\'
                          OR deity ILIKE $1 ESCAPE '\'
                       ORDER BY created_at DESC"#
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PlaceRow>(&format!(
                    "SELECT {PLACE_COLUMNS} FROM places ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            error!("Failed to list places: {}", e);
            DomainError::InfrastructureError(format!("Failed to retrieve places: {}", e))
        })?;

        debug!("Retrieved {} places", rows.len());
        Ok(rows.into_iter().map(Place::from).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM places")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
