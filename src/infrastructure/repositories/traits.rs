use async_trait::async_trait;

use crate::domain::{NewSchool, School};
use crate::error::AppResult;

/// Persistence collaborator for school records.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Stores the school and returns the id the store assigned to it.
    async fn insert(&self, school: &NewSchool) -> AppResult<i64>;

    /// Every stored school, in insertion order.
    async fn list_all(&self) -> AppResult<Vec<School>>;
}
