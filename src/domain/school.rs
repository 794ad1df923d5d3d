use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::geo::haversine_km;

pub const NAME_MESSAGE: &str = "Invalid or missing school name.";
pub const ADDRESS_MESSAGE: &str = "Invalid or missing school address.";
pub const LATITUDE_MESSAGE: &str = "Invalid latitude (must be between -90 and 90).";
pub const LONGITUDE_MESSAGE: &str = "Invalid longitude (must be between -180 and 180).";
pub const USER_LATITUDE_MESSAGE: &str = "Invalid userLat (latitude must be between -90 and 90).";
pub const USER_LONGITUDE_MESSAGE: &str =
    "Invalid userLon (longitude must be between -180 and 180).";

/// Order in which school fields are checked; the first failure is reported.
pub const FIELD_ORDER: [&str; 4] = ["name", "address", "latitude", "longitude"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A school that passed boundary checks and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewSchool {
    #[validate(length(min = 1, message = "Invalid or missing school name."))]
    pub name: String,
    #[validate(length(min = 1, message = "Invalid or missing school address."))]
    pub address: String,
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "Invalid latitude (must be between -90 and 90)."
    ))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Invalid longitude (must be between -180 and 180)."
    ))]
    pub longitude: f64,
}

impl NewSchool {
    pub fn new(
        name: impl AsRef<str>,
        address: impl AsRef<str>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            address: address.as_ref().trim().to_string(),
            latitude,
            longitude,
        }
    }

    pub fn into_school(self, id: i64) -> School {
        School {
            id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// The coordinate a caller wants schools ranked against.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct UserLocation {
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "Invalid userLat (latitude must be between -90 and 90)."
    ))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Invalid userLon (longitude must be between -180 and 180)."
    ))]
    pub longitude: f64,
}

impl UserLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, school: &School) -> f64 {
        haversine_km(
            self.latitude,
            self.longitude,
            school.latitude,
            school.longitude,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchoolWithDistance {
    pub school: School,
    pub distance: f64,
}

/// Attaches the distance from `origin` to every school and orders them
/// nearest first. Equal distances keep their input order.
pub fn rank_by_distance(origin: &UserLocation, schools: Vec<School>) -> Vec<SchoolWithDistance> {
    let mut ranked = schools
        .into_iter()
        .map(|school| SchoolWithDistance {
            distance: origin.distance_to(&school),
            school,
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|left, right| left.distance.total_cmp(&right.distance));
    ranked
}
