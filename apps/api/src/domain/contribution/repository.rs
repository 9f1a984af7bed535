use super::entity::{Contribution, NewContribution};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

/// Store contract for contributions. Records are insert-only.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContributionRepository: Send + Sync {
    async fn insert(&self, contribution: &NewContribution) -> Result<Uuid, DomainError>;
    /// All contributions, newest first. `search` narrows by a
    /// case-insensitive substring over title, description and address.
    async fn list(&self, search: Option<String>) -> Result<Vec<Contribution>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    /// The `limit` most recent contributions, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<Contribution>, DomainError>;
}
