use std::ops::RangeInclusive;

/// Mean Earth radius used for great-circle distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Great-circle distance between two points given in degrees, in kilometers.
///
/// Callers are expected to pass coordinates that already sit inside
/// [`LATITUDE_RANGE`] and [`LONGITUDE_RANGE`].
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && LATITUDE_RANGE.contains(&value)
}

pub fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && LONGITUDE_RANGE.contains(&value)
}
