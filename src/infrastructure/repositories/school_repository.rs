use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewSchool, School};
use crate::error::AppResult;

use super::traits::SchoolRepository;

pub struct SchoolRepositoryImpl {
    pool: PgPool,
}

impl SchoolRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolRepository for SchoolRepositoryImpl {
    async fn insert(&self, school: &NewSchool) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO schools (name, address, latitude, longitude) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn list_all(&self) -> AppResult<Vec<School>> {
        let schools = sqlx::query_as::<_, School>(
            "SELECT id, name, address, latitude, longitude FROM schools ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(schools)
    }
}
