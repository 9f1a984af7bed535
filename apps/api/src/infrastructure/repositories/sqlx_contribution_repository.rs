use super::like_pattern;
use crate::domain::{
    contribution::{
        entity::{ContentCategory, Contribution, NewContribution},
        repository::ContributionRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const CONTRIBUTION_COLUMNS: &str = "id, title, category, description, file_url, latitude, \
     longitude, location_address, contributor_name, created_at";

#[derive(FromRow)]
struct ContributionRow {
    id: Uuid,
    title: String,
    category: String,
    description: Option<String>,
    file_url: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    location_address: Option<String>,
    contributor_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContributionRow> for Contribution {
    type Error = DomainError;

    fn try_from(r: ContributionRow) -> Result<Self, Self::Error> {
        let category = r.category.parse::<ContentCategory>().map_err(|e| {
            error!(id = %r.id, "corrupt contribution row: {}", e);
            DomainError::InfrastructureError(e)
        })?;

        Ok(Contribution {
            id: r.id,
            title: r.title,
            category,
            description: r.description,
            file_url: r.file_url,
            latitude: r.latitude,
            longitude: r.longitude,
            location_address: r.location_address,
            contributor_name: r.contributor_name,
            created_at: r.created_at,
        })
    }
}

fn into_contributions(rows: Vec<ContributionRow>) -> Result<Vec<Contribution>, DomainError> {
    rows.into_iter().map(Contribution::try_from).collect()
}

pub struct SqlxContributionRepository {
    pool: PgPool,
}

impl SqlxContributionRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxContributionRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl ContributionRepository for SqlxContributionRepository {
    #[instrument(skip(self, contribution), fields(title = %contribution.title, category = %contribution.category))]
    async fn insert(&self, contribution: &NewContribution) -> Result<Uuid, DomainError> {
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO contributions (title, category, description, file_url, latitude,
                                          longitude, location_address, contributor_name)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING id"#,
        )
        .bind(&contribution.title)
        .bind(contribution.category.as_str())
        .bind(&contribution.description)
        .bind(&contribution.file_url)
        .bind(contribution.latitude)
        .bind(contribution.longitude)
        .bind(&contribution.location_address)
        .bind(&contribution.contributor_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to insert contribution: {}", e);
            DomainError::InfrastructureError(format!("Failed to save contribution: {}", e))
        })?;

        info!(%id, "contribution inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self, search: Option<String>) -> Result<Vec<Contribution>, DomainError> {
        let rows = match search.as_deref().map(like_pattern) {
            Some(pattern) => {
                sqlx::query_as::<_, ContributionRow>(&format!(
                    r#"SELECT {CONTRIBUTION_COLUMNS} FROM contributions
                       WHERE title ILIKE $1 ESCAPE '\'
                          OR description ILIKE $1 ESCAPE '\'
                          OR location_address ILIKE $1 ESCAPE '\'
                       ORDER BY created_at DESC"#
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ContributionRow>(&format!(
                    "SELECT {CONTRIBUTION_COLUMNS} FROM contributions ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            error!("Failed to list contributions: {}", e);
            DomainError::InfrastructureError(format!("Failed to retrieve contributions: {}", e))
        })?;

        debug!("Retrieved {} contributions", rows.len());
        into_contributions(rows)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contributions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> Result<Vec<Contribution>, DomainError> {
        let rows = sqlx::query_as::<_, ContributionRow>(&format!(
            "SELECT {CONTRIBUTION_COLUMNS} FROM contributions ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch {} recent contributions: {}", limit, e);
            DomainError::InfrastructureError(format!("Failed to retrieve contributions: {}", e))
        })?;

        into_contributions(rows)
    }
}
