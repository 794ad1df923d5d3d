pub mod errors;
pub mod geo;
pub mod school;

pub use errors::DomainError;
pub use geo::haversine_km;
pub use school::{rank_by_distance, NewSchool, School, SchoolWithDistance, UserLocation};
