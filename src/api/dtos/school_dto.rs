use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::geo::{is_valid_latitude, is_valid_longitude};
use crate::domain::school::{
    ADDRESS_MESSAGE, LATITUDE_MESSAGE, LONGITUDE_MESSAGE, NAME_MESSAGE, USER_LATITUDE_MESSAGE,
    USER_LONGITUDE_MESSAGE,
};
use crate::domain::{DomainError, NewSchool, School, SchoolWithDistance, UserLocation};

pub const SCHOOL_ADDED_MESSAGE: &str = "School added successfully!";

/// Body of `POST /addSchool`. Fields stay untyped until
/// [`AddSchoolRequest::into_new_school`] checks them in order.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddSchoolRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Springfield Elementary")]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "19 Plympton St, Springfield")]
    pub address: Option<Value>,
    #[serde(default)]
    #[schema(value_type = f64, example = 39.7817)]
    pub latitude: Option<Value>,
    #[serde(default)]
    #[schema(value_type = f64, example = -89.6501)]
    pub longitude: Option<Value>,
}

impl AddSchoolRequest {
    /// Stops at the first failing field: name, address, latitude, longitude.
    pub fn into_new_school(self) -> Result<NewSchool, DomainError> {
        let name = required_text(self.name.as_ref(), NAME_MESSAGE)?;
        let address = required_text(self.address.as_ref(), ADDRESS_MESSAGE)?;
        let latitude = json_coordinate(self.latitude.as_ref())
            .filter(|value| is_valid_latitude(*value))
            .ok_or_else(|| DomainError::validation(LATITUDE_MESSAGE))?;
        let longitude = json_coordinate(self.longitude.as_ref())
            .filter(|value| is_valid_longitude(*value))
            .ok_or_else(|| DomainError::validation(LONGITUDE_MESSAGE))?;

        Ok(NewSchool::new(name, address, latitude, longitude))
    }
}

/// Query string of `GET /listSchools`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSchoolsQuery {
    /// Caller latitude in degrees, -90 to 90
    #[serde(rename = "userLat")]
    #[param(value_type = f64)]
    pub user_lat: Option<String>,
    /// Caller longitude in degrees, -180 to 180
    #[serde(rename = "userLon")]
    #[param(value_type = f64)]
    pub user_lon: Option<String>,
}

impl ListSchoolsQuery {
    pub fn into_user_location(self) -> Result<UserLocation, DomainError> {
        let latitude = self
            .user_lat
            .as_deref()
            .and_then(parse_coordinate)
            .filter(|value| is_valid_latitude(*value))
            .ok_or_else(|| DomainError::validation(USER_LATITUDE_MESSAGE))?;
        let longitude = self
            .user_lon
            .as_deref()
            .and_then(parse_coordinate)
            .filter(|value| is_valid_longitude(*value))
            .ok_or_else(|| DomainError::validation(USER_LONGITUDE_MESSAGE))?;

        Ok(UserLocation::new(latitude, longitude))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<School> for SchoolResponse {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
            address: school.address,
            latitude: school.latitude,
            longitude: school.longitude,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddSchoolResponse {
    pub message: String,
    pub school: SchoolResponse,
}

impl AddSchoolResponse {
    pub fn created(school: SchoolResponse) -> Self {
        Self {
            message: SCHOOL_ADDED_MESSAGE.to_string(),
            school,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchoolDistanceResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance from the caller, in kilometers
    pub distance: f64,
}

impl From<SchoolWithDistance> for SchoolDistanceResponse {
    fn from(ranked: SchoolWithDistance) -> Self {
        let SchoolWithDistance { school, distance } = ranked;
        Self {
            id: school.id,
            name: school.name,
            address: school.address,
            latitude: school.latitude,
            longitude: school.longitude,
            distance,
        }
    }
}

fn required_text(value: Option<&Value>, message: &str) -> Result<String, DomainError> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(DomainError::validation(message)),
    }
}

/// Numbers pass through; strings must hold a complete decimal number.
fn json_coordinate(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => parse_coordinate(text),
        _ => None,
    }
}

pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
