use geo::Point;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use within_core::{EdgeAttributes, Error, NodeId, Route, StreetName};

use super::to_py_err;

/// Route
///
/// A finished path through a street network with its total length and a
/// turn-by-turn description. Both are computed once, when the route is
/// created.
///
/// Parameters
/// ----------
/// graph_node_idx : list[int]
///     Node identifiers in travel order, at least two
/// edges : dict[tuple[int, int], dict]
///     Edge data keyed by ``(from, to)``, with ``length`` in meters and an
///     optional ``name`` (a string or a list of strings)
/// nodes : dict[int, dict]
///     Node data with ``x`` (longitude) and ``y`` (latitude)
///
/// Raises
/// ------
/// ValueError
///     If an edge or node of the path is missing, or a street name has an
///     unsupported type
#[pyclass(name = "Route", frozen)]
pub struct PyRoute {
    inner: Route,
}

#[pymethods]
impl PyRoute {
    #[new]
    fn new(
        graph_node_idx: Vec<NodeId>,
        edges: &Bound<'_, PyDict>,
        nodes: &Bound<'_, PyDict>,
    ) -> PyResult<Self> {
        let mut edge_map = hashbrown::HashMap::with_capacity(edges.len());
        for (key, value) in edges.iter() {
            let (from, to) = key.extract::<(NodeId, NodeId)>()?;
            let data = value.extract::<Bound<'_, PyDict>>()?;
            let length = data
                .get_item("length")?
                .ok_or_else(|| {
                    to_py_err(Error::MalformedPath(format!(
                        "edge {from} -> {to} has no length"
                    )))
                })?
                .extract::<f64>()?;
            let name = street_name(data.get_item("name")?)?;
            edge_map.insert((from, to), EdgeAttributes::new(length, name));
        }

        let mut node_map = hashbrown::HashMap::with_capacity(nodes.len());
        for (key, value) in nodes.iter() {
            let id = key.extract::<NodeId>()?;
            let data = value.extract::<Bound<'_, PyDict>>()?;
            let coordinate = |axis: &str| -> PyResult<f64> {
                data.get_item(axis)?
                    .ok_or_else(|| {
                        to_py_err(Error::MalformedPath(format!("node {id} has no {axis}")))
                    })?
                    .extract::<f64>()
            };
            node_map.insert(id, Point::new(coordinate("x")?, coordinate("y")?));
        }

        let inner = Route::new(graph_node_idx, edge_map, node_map).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Create a route from its JSON representation
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let inner = Route::from_json_str(json).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn graph_node_idx(&self) -> Vec<NodeId> {
        self.inner.node_sequence().to_vec()
    }

    #[getter]
    fn total_length_m(&self) -> f64 {
        self.inner.total_length_m()
    }

    #[getter]
    fn description(&self) -> Vec<String> {
        self.inner.description().to_vec()
    }

    /// (latitude, longitude) of every node along the route
    #[getter]
    fn path_coordinates(&self) -> Vec<(f64, f64)> {
        self.inner.path_coordinates()
    }

    /// Route and its segments as a GeoJSON FeatureCollection string
    fn to_geojson(&self) -> PyResult<String> {
        self.inner.to_geojson_string().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Route with {} edges, {:.1} km",
            self.inner.edge_count(),
            self.inner.total_length_m() / 1000.0
        )
    }

    fn __str__(&self) -> String {
        self.inner.description().join("\n")
    }
}

/// Missing or `None` names are unnamed streets
fn street_name(value: Option<Bound<'_, PyAny>>) -> PyResult<StreetName> {
    let Some(value) = value else {
        return Ok(StreetName::Unnamed);
    };
    if value.is_none() {
        return Ok(StreetName::Unnamed);
    }
    if let Ok(name) = value.extract::<String>() {
        return Ok(StreetName::Single(name));
    }
    match value.extract::<Vec<String>>() {
        Ok(names) if !names.is_empty() => Ok(StreetName::Multiple(names)),
        _ => Err(to_py_err(Error::UnrecognizedStreetNameShape(format!(
            "{value}"
        )))),
    }
}
