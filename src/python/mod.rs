use pyo3::prelude::*;
use within_core::Error;

use geometry::{
    get_bearing, get_cardinal_direction, get_turning_instruction, great_circle_distance,
    great_circle_halfway_point,
};
use route::PyRoute;
use trip::PyTrip;

pub mod geometry;
pub mod route;
pub mod trip;

/// A Python module implemented in Rust.
#[pymodule]
fn within(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add("EARTH_RADIUS", within_core::geometry::EARTH_RADIUS_KM)?;
    m.add("POSSIBLE_TRANSPORTATION_MODES", trip::mode_names())?;

    m.add_function(wrap_pyfunction!(great_circle_distance, m)?)?;
    m.add_function(wrap_pyfunction!(great_circle_halfway_point, m)?)?;
    m.add_function(wrap_pyfunction!(get_bearing, m)?)?;
    m.add_function(wrap_pyfunction!(get_cardinal_direction, m)?)?;
    m.add_function(wrap_pyfunction!(get_turning_instruction, m)?)?;

    m.add_class::<PyRoute>()?;
    m.add_class::<PyTrip>()?;
    Ok(())
}

/// Malformed input becomes `ValueError`, anything else `RuntimeError`
pub(crate) fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::MalformedPath(_)
        | Error::UnrecognizedStreetNameShape(_)
        | Error::InvalidData(_)
        | Error::Json(_) => PyErr::new::<pyo3::exceptions::PyValueError, _>(error.to_string()),
        Error::GeoJsonError(_) => {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(error.to_string())
        }
    }
}
