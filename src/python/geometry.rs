use pyo3::prelude::*;
use within_core::geometry;

/// Great-circle distance between two points (haversine formula)
///
/// Parameters
/// ----------
/// start_latitude, start_longitude, end_latitude, end_longitude : float
///     Coordinates in degrees
/// radius : float, default=6371
///     Sphere radius, the result is in the same unit (kilometers by default)
#[pyfunction]
#[pyo3(signature = (start_latitude, start_longitude, end_latitude, end_longitude, radius=geometry::EARTH_RADIUS_KM))]
pub fn great_circle_distance(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
    radius: f64,
) -> f64 {
    geometry::great_circle_distance_with_radius(
        start_latitude,
        start_longitude,
        end_latitude,
        end_longitude,
        radius,
    )
}

/// Half-way point along the great circle between two points, as (latitude, longitude)
#[pyfunction]
pub fn great_circle_halfway_point(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
) -> (f64, f64) {
    geometry::great_circle_halfway_point(start_latitude, start_longitude, end_latitude, end_longitude)
}

/// Initial great-circle bearing in degrees, in [0, 360)
#[pyfunction]
pub fn get_bearing(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
) -> f64 {
    geometry::bearing(start_latitude, start_longitude, end_latitude, end_longitude)
}

/// One of 16 compass directions for a bearing in degrees
#[pyfunction]
pub fn get_cardinal_direction(bearing_degrees: f64) -> &'static str {
    geometry::cardinal_direction(bearing_degrees).label()
}

#[pyfunction]
pub fn get_turning_instruction(current_bearing: f64, next_bearing: f64) -> String {
    geometry::turning_instruction(current_bearing, next_bearing).to_string()
}
