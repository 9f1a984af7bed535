use super::entity::{NewPlace, Place};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

/// Store contract for places. Records are insert-only.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Inserts a place and returns the store-assigned id.
    async fn insert(&self, place: &NewPlace) -> Result<Uuid, DomainError>;
    /// All places, newest first. `search` narrows by a case-insensitive
    /// substring over name, deity, narrative and address.
    async fn list(&self, search: Option<String>) -> Result<Vec<Place>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
