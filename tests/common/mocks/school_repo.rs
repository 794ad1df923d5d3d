#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use school_api::domain::{NewSchool, School};
use school_api::error::{AppError, AppResult};
use school_api::infrastructure::repositories::SchoolRepository;

use super::utils::STORE_FAILURE_REASON;

/// In-memory store handing out ids from 1 in insertion order.
pub struct MockSchoolRepo {
    pub schools: Mutex<Vec<School>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl Default for MockSchoolRepo {
    fn default() -> Self {
        Self {
            schools: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            failing: AtomicBool::new(false),
        }
    }
}

impl MockSchoolRepo {
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.set_failing(true);
        repo
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn seed(&self, name: &str, latitude: f64, longitude: f64) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.schools
            .lock()
            .expect("schools mutex poisoned")
            .push(NewSchool::new(name, format!("{name} road"), latitude, longitude).into_school(id));
        id
    }

    pub fn stored(&self) -> Vec<School> {
        self.schools.lock().expect("schools mutex poisoned").clone()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(sqlx::Error::Protocol(
                STORE_FAILURE_REASON.to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SchoolRepository for MockSchoolRepo {
    async fn insert(&self, school: &NewSchool) -> AppResult<i64> {
        self.check_available()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.schools
            .lock()
            .expect("schools mutex poisoned")
            .push(school.clone().into_school(id));
        Ok(id)
    }

    async fn list_all(&self) -> AppResult<Vec<School>> {
        self.check_available()?;
        Ok(self.stored())
    }
}
