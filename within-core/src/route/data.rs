//! Serialized route input as produced by a path provider.
//!
//! ```json
//! {
//!   "graph_node_idx": [1, 2],
//!   "edges": [{"from": 1, "to": 2, "length": 500.0, "name": "Elm St"}],
//!   "nodes": {"1": {"x": 0.0, "y": 0.0}, "2": {"x": 0.0, "y": 0.0045}}
//! }
//! ```
//!
//! `name` may be missing, `null`, a string or a list of strings.

use geo::Point;
use hashbrown::HashMap;
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use super::Route;
use crate::{
    Error, NodeId,
    model::{EdgeAttributes, StreetName},
};

#[derive(Debug, Clone, Deserialize)]
pub struct RouteData {
    pub graph_node_idx: Vec<NodeId>,
    pub edges: Vec<EdgeRecord>,
    pub nodes: HashMap<NodeId, NodeRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub length: f64,
    #[serde(default)]
    pub name: Value,
}

/// Node coordinates, x = longitude, y = latitude
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NodeRecord {
    pub x: f64,
    pub y: f64,
}

impl TryFrom<RouteData> for Route {
    type Error = Error;

    fn try_from(data: RouteData) -> Result<Self, Self::Error> {
        let mut edges = HashMap::with_capacity(data.edges.len());
        for record in data.edges {
            let name = StreetName::try_from(&record.name)?;
            let key = (record.from, record.to);
            if edges
                .insert(key, EdgeAttributes::new(record.length, name))
                .is_some()
            {
                warn!(
                    "Duplicate edge {} -> {}, keeping the last one",
                    record.from, record.to
                );
            }
        }

        let nodes = data
            .nodes
            .into_iter()
            .map(|(id, node)| (id, Point::new(node.x, node.y)))
            .collect();

        Route::new(data.graph_node_idx, edges, nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELM_ST: &str = r#"{
        "graph_node_idx": [1, 2],
        "edges": [{"from": 1, "to": 2, "length": 500.0, "name": "Elm St"}],
        "nodes": {"1": {"x": 0.0, "y": 0.0}, "2": {"x": 0.0, "y": 0.0045}}
    }"#;

    #[test]
    fn parses_documented_shape() {
        let route = Route::from_json_str(ELM_ST).unwrap();
        assert_eq!(route.node_sequence(), [1, 2]);
        assert_eq!(route.description()[0], "Head N on Elm St and continue for 500 m");
    }

    #[test]
    fn missing_name_is_unnamed() {
        let json = ELM_ST.replace(r#", "name": "Elm St""#, "");
        let route = Route::from_json_str(&json).unwrap();
        assert_eq!(route.edge(1, 2).unwrap().name, StreetName::Unnamed);
        assert!(route.description()[0].contains("unnamed street"));
    }

    #[test]
    fn list_names_are_joined() {
        let json = ELM_ST.replace(r#""Elm St""#, r#"["Elm St", "Route 9"]"#);
        let route = Route::from_json_str(&json).unwrap();
        assert_eq!(
            route.description()[0],
            "Head N on Elm St/Route 9 and continue for 500 m"
        );
    }

    #[test]
    fn odd_name_shape_is_reported() {
        let json = ELM_ST.replace(r#""Elm St""#, "17");
        let err = Route::from_json_str(&json).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedStreetNameShape(_)));
    }

    #[test]
    fn broken_document_is_a_json_error() {
        let err = Route::from_json_str("{\"graph_node_idx\": [1, 2]").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
