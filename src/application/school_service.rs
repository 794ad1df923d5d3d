use std::sync::Arc;

use tracing::{error, info};
use validator::Validate;

use crate::api::dtos::{SchoolDistanceResponse, SchoolResponse};
use crate::domain::{rank_by_distance, NewSchool, UserLocation};
use crate::error::AppResult;
use crate::infrastructure::repositories::SchoolRepository;

pub const ADD_SCHOOL_FAILURE: &str = "Failed to add school to database.";
pub const LIST_SCHOOLS_FAILURE: &str = "Failed to retrieve schools.";

#[derive(Clone)]
pub struct SchoolService {
    school_repo: Arc<dyn SchoolRepository>,
}

impl SchoolService {
    pub fn new(school_repo: Arc<dyn SchoolRepository>) -> Self {
        Self { school_repo }
    }

    pub async fn add(&self, new_school: NewSchool) -> AppResult<SchoolResponse> {
        new_school.validate()?;

        let id = self.school_repo.insert(&new_school).await.map_err(|err| {
            error!(error = %err, "failed to add school");
            err.in_context(ADD_SCHOOL_FAILURE)
        })?;
        info!(school_id = id, "school added");

        Ok(new_school.into_school(id).into())
    }

    /// Every stored school with its distance from `origin`, nearest first.
    pub async fn list_by_distance(
        &self,
        origin: UserLocation,
    ) -> AppResult<Vec<SchoolDistanceResponse>> {
        origin.validate()?;

        let schools = self.school_repo.list_all().await.map_err(|err| {
            error!(error = %err, "failed to fetch schools");
            err.in_context(LIST_SCHOOLS_FAILURE)
        })?;

        Ok(rank_by_distance(&origin, schools)
            .into_iter()
            .map(SchoolDistanceResponse::from)
            .collect())
    }
}
