//! Great-circle primitives on a spherical Earth.
//!
//! All functions take and return degrees. Coordinates are plain WGS84-like
//! latitude/longitude pairs without datum correction.

use geo::Point;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points on the Earth.
///
/// Uses the haversine formula with [`EARTH_RADIUS_KM`].
pub fn great_circle_distance(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
) -> f64 {
    great_circle_distance_with_radius(
        start_latitude,
        start_longitude,
        end_latitude,
        end_longitude,
        EARTH_RADIUS_KM,
    )
}

/// Great-circle distance on a sphere of the given radius.
///
/// The result is expressed in the unit of `radius`.
pub fn great_circle_distance_with_radius(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
    radius: f64,
) -> f64 {
    let start_lat = start_latitude.to_radians();
    let end_lat = end_latitude.to_radians();
    let lat_delta = (start_latitude - end_latitude).to_radians();
    let lon_delta = (end_longitude - start_longitude).to_radians();

    let haversine = (lat_delta / 2.0).sin().powi(2)
        + start_lat.cos() * end_lat.cos() * (lon_delta / 2.0).sin().powi(2);
    // Rounding can push the term marginally outside [0, 1] for antipodes
    let haversine = haversine.clamp(0.0, 1.0);
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).sqrt());

    central_angle * radius
}

/// Midpoint of the great-circle arc between two points.
///
/// Returns `(latitude, longitude)` in degrees.
pub fn great_circle_halfway_point(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
) -> (f64, f64) {
    let start_lat = start_latitude.to_radians();
    let end_lat = end_latitude.to_radians();
    let start_lon = start_longitude.to_radians();
    let lon_delta = (end_longitude - start_longitude).to_radians();

    let bx = end_lat.cos() * lon_delta.cos();
    let by = end_lat.cos() * lon_delta.sin();

    let mid_lat = (start_lat.sin() + end_lat.sin())
        .atan2(((start_lat.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let mid_lon = start_lon + by.atan2(start_lat.cos() + bx);

    (mid_lat.to_degrees(), mid_lon.to_degrees())
}

/// Initial great-circle bearing from the start point towards the end point.
///
/// The result is normalized to `[0, 360)`, clockwise from north.
pub fn bearing(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
) -> f64 {
    let start_lat = start_latitude.to_radians();
    let end_lat = end_latitude.to_radians();
    let lon_delta = (end_longitude - start_longitude).to_radians();

    let x = lon_delta.sin() * end_lat.cos();
    let y = start_lat.cos() * end_lat.sin() - start_lat.sin() * end_lat.cos() * lon_delta.cos();

    let bearing = x.atan2(y).to_degrees();
    (bearing + 360.0) % 360.0
}

/// [`bearing`] between two `geo` points (x = longitude, y = latitude)
pub fn point_bearing(from: &Point<f64>, to: &Point<f64>) -> f64 {
    bearing(from.y(), from.x(), to.y(), to.x())
}

/// [`great_circle_distance`] between two `geo` points, in kilometers
pub fn point_distance_km(from: &Point<f64>, to: &Point<f64>) -> f64 {
    great_circle_distance(from.y(), from.x(), to.y(), to.x())
}
