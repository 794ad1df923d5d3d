use school_api::domain::geo::EARTH_RADIUS_KM;

pub const STORE_FAILURE_REASON: &str = "connection reset by peer";

/// The point `distance_km` east of `(0, 0)` along the equator.
pub fn destination(distance_km: f64) -> (f64, f64) {
    (0.0, (distance_km / EARTH_RADIUS_KM).to_degrees())
}
