use geo::Point;
use pyo3::prelude::*;
use within_core::{TransportMode, TripConfig};

use super::to_py_err;

pub(crate) fn mode_names() -> Vec<&'static str> {
    TransportMode::ALL.iter().map(|mode| mode.name()).collect()
}

/// Trip
///
/// Origin and destination of a trip, as (latitude, longitude) pairs, plus the
/// mode of transport. Provides the area a street network has to cover for
/// routing between the two points.
///
/// Example:
///
/// .. code-block:: python
///
///     trip = Trip((40.750504, -73.993438), (40.7048, -74.0173), "walk")
///     trip.as_the_crow_flies_distance_km  # 5.465...
#[pyclass(name = "Trip", frozen)]
pub struct PyTrip {
    inner: TripConfig,
}

#[pymethods]
impl PyTrip {
    #[new]
    #[pyo3(signature = (starting_point, destination, transport_mode="drive"))]
    fn new(
        starting_point: (f64, f64),
        destination: (f64, f64),
        transport_mode: &str,
    ) -> PyResult<Self> {
        let transport_mode = transport_mode.parse::<TransportMode>().map_err(to_py_err)?;
        let inner = TripConfig::new(
            Point::new(starting_point.1, starting_point.0),
            Point::new(destination.1, destination.0),
            transport_mode,
        );
        inner.validate().map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn transport_mode(&self) -> &'static str {
        self.inner.transport_mode.name()
    }

    #[getter]
    fn as_the_crow_flies_distance_km(&self) -> f64 {
        self.inner.crow_flies_distance_km()
    }

    /// (latitude, longitude) for the halfway point between starting point and destination
    #[getter]
    fn midway_coordinate(&self) -> (f64, f64) {
        self.inner.midway_coordinate()
    }

    /// Radius in meters around the midway coordinate that covers both endpoints
    #[getter]
    fn network_radius_m(&self) -> f64 {
        self.inner.network_radius_m()
    }

    fn __repr__(&self) -> String {
        format!(
            "Trip({:.6}, {:.6} -> {:.6}, {:.6}, {})",
            self.inner.origin.y(),
            self.inner.origin.x(),
            self.inner.destination.y(),
            self.inner.destination.x(),
            self.inner.transport_mode
        )
    }
}
