//! A finished path through a street network and its turn-by-turn description.

mod data;
mod to_geojson;

pub use data::{EdgeRecord, NodeRecord, RouteData};

use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    Error, NodeId,
    description::{EdgeStep, Instruction, merge_segments, render},
    geometry::point_bearing,
    model::EdgeAttributes,
};

/// Immutable route value.
///
/// Built once from a computed path, the node sequence plus the attributes of
/// every traversed edge and the coordinates of every visited node. The total
/// length and the description are derived at construction time, so all
/// accessors are cheap and a `Route` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Route {
    node_sequence: Vec<NodeId>,
    edges: HashMap<(NodeId, NodeId), EdgeAttributes>,
    nodes: HashMap<NodeId, Point<f64>>,
    total_length_m: f64,
    instructions: Vec<Instruction>,
    description: Vec<String>,
}

impl Route {
    /// Creates a route from a path and snapshots of its edges and nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] if the path has fewer than two nodes,
    /// a consecutive pair has no edge, a node has no coordinates, or an edge
    /// length is negative or not finite.
    pub fn new(
        node_sequence: Vec<NodeId>,
        edges: HashMap<(NodeId, NodeId), EdgeAttributes>,
        nodes: HashMap<NodeId, Point<f64>>,
    ) -> Result<Self, Error> {
        if node_sequence.len() < 2 {
            return Err(Error::MalformedPath(format!(
                "path needs at least two nodes, got {}",
                node_sequence.len()
            )));
        }

        if let Some(missing) = node_sequence.iter().find(|id| !nodes.contains_key(*id)) {
            return Err(Error::MalformedPath(format!(
                "node {missing} has no coordinates"
            )));
        }

        let steps = node_sequence
            .iter()
            .tuple_windows()
            .map(|(from, to)| edge_step(&edges, &nodes, *from, *to))
            .collect::<Result<Vec<_>, _>>()?;

        let total_length_m: f64 = steps.iter().map(|step| step.length_m).sum();
        let instructions = merge_segments(steps);
        let description = render(&instructions);

        debug!(
            "Route with {} edges, {:.1} m, {} instructions",
            node_sequence.len() - 1,
            total_length_m,
            instructions.len()
        );

        Ok(Self {
            node_sequence,
            edges,
            nodes,
            total_length_m,
            instructions,
            description,
        })
    }

    /// Parses a [`RouteData`] JSON document and builds the route from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for invalid documents, and the errors of
    /// [`Route::new`] for invalid paths.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let data: RouteData = serde_json::from_str(json)?;
        Route::try_from(data)
    }

    pub fn node_sequence(&self) -> &[NodeId] {
        &self.node_sequence
    }

    pub fn edges(&self) -> &HashMap<(NodeId, NodeId), EdgeAttributes> {
        &self.edges
    }

    pub fn nodes(&self) -> &HashMap<NodeId, Point<f64>> {
        &self.nodes
    }

    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&EdgeAttributes> {
        self.edges.get(&(from, to))
    }

    /// Number of traversed edges
    pub fn edge_count(&self) -> usize {
        self.node_sequence.len() - 1
    }

    /// Sum of the lengths of all traversed edges, in meters
    pub fn total_length_m(&self) -> f64 {
        self.total_length_m
    }

    /// Structured turn-by-turn instructions, one per street segment
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Text description, ending with the arrival line
    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// `(latitude, longitude)` of every visited node, in travel order
    pub fn path_coordinates(&self) -> Vec<(f64, f64)> {
        self.path_points().map(|p| (p.y(), p.x())).collect()
    }

    pub(crate) fn path_points(&self) -> impl Iterator<Item = Point<f64>> + '_ {
        // Presence of every node is checked in `Route::new`
        self.node_sequence
            .iter()
            .filter_map(|id| self.nodes.get(id).copied())
    }
}

fn edge_step(
    edges: &HashMap<(NodeId, NodeId), EdgeAttributes>,
    nodes: &HashMap<NodeId, Point<f64>>,
    from: NodeId,
    to: NodeId,
) -> Result<EdgeStep, Error> {
    let edge = edges
        .get(&(from, to))
        .ok_or_else(|| Error::MalformedPath(format!("no edge from node {from} to node {to}")))?;

    if !edge.length.is_finite() || edge.length < 0.0 {
        return Err(Error::MalformedPath(format!(
            "edge {from} -> {to} has invalid length {}",
            edge.length
        )));
    }
    if edge.length == 0.0 || from == to {
        warn!("Degenerate edge {from} -> {to} ({} m)", edge.length);
    }

    let (Some(source), Some(target)) = (nodes.get(&from), nodes.get(&to)) else {
        return Err(Error::MalformedPath(format!(
            "edge {from} -> {to} references a node without coordinates"
        )));
    };

    Ok(EdgeStep {
        street: edge.name.joined(),
        bearing: point_bearing(source, target),
        length_m: edge.length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StreetName;

    /// Builds a route along the given `(lon, lat)` points, one edge per pair
    fn route_through(points: &[(f64, f64)], edges: &[(f64, StreetName)]) -> Result<Route, Error> {
        let node_sequence: Vec<NodeId> = (1..=points.len() as NodeId).collect();
        let nodes = node_sequence
            .iter()
            .zip(points)
            .map(|(id, (lon, lat))| (*id, Point::new(*lon, *lat)))
            .collect();
        let edges = node_sequence
            .iter()
            .tuple_windows()
            .zip(edges)
            .map(|((a, b), (length, name))| ((*a, *b), EdgeAttributes::new(*length, name.clone())))
            .collect();
        Route::new(node_sequence, edges, nodes)
    }

    #[test]
    fn single_edge_route() {
        let route = route_through(
            &[(0.0, 0.0), (0.0, 0.0045)],
            &[(500.0, StreetName::from("Elm St"))],
        )
        .unwrap();
        assert_eq!(
            route.description(),
            [
                "Head N on Elm St and continue for 500 m",
                "Arriving at your destination."
            ]
        );
        assert_eq!(route.total_length_m(), 500.0);
        assert_eq!(route.edge_count(), 1);
    }

    #[test]
    fn merges_same_street_before_turning() {
        let main = StreetName::from("Main St");
        let route = route_through(
            &[(0.0, 0.0), (0.0, 0.001), (0.0, 0.003), (0.0, 0.006), (0.0005, 0.006)],
            &[
                (100.0, main.clone()),
                (200.0, main.clone()),
                (300.0, main),
                (50.0, StreetName::from("Oak Ave")),
            ],
        )
        .unwrap();
        assert_eq!(
            route.description(),
            [
                "Head N on Main St and continue for 600 m",
                "Turn right on Oak Ave (E) and continue for 50 m",
                "Arriving at your destination."
            ]
        );
        assert_eq!(route.total_length_m(), 650.0);
    }

    #[test]
    fn unnamed_and_shared_names() {
        let shared = || StreetName::from(vec!["Broadway".to_string(), "7th Ave".to_string()]);
        let route = route_through(
            &[(0.0, 0.0), (0.001, 0.0), (0.002, 0.0), (0.002, -0.001)],
            &[(80.0, StreetName::Unnamed), (1200.0, shared()), (20.0, shared())],
        )
        .unwrap();
        assert_eq!(
            route.description(),
            [
                "Head E on unnamed street and continue for 80 m",
                "Continue straight on Broadway/7th Ave (E) and continue for 1.2 km",
                "Arriving at your destination."
            ]
        );
    }

    #[test]
    fn accessors_are_idempotent() {
        let route = route_through(
            &[(0.0, 0.0), (0.001, 0.0), (0.001, 0.001)],
            &[(100.0, StreetName::from("A")), (120.0, StreetName::from("B"))],
        )
        .unwrap();
        assert_eq!(route.description(), route.description());
        assert_eq!(route.total_length_m(), route.total_length_m());
        assert_eq!(route.description().to_vec(), route.clone().description().to_vec());
    }

    #[test]
    fn path_coordinates_are_lat_lon() {
        let route = route_through(
            &[(4.35, 50.85), (4.40, 51.22)],
            &[(41_000.0, StreetName::from("E19"))],
        )
        .unwrap();
        assert_eq!(route.path_coordinates(), vec![(50.85, 4.35), (51.22, 4.40)]);
        assert_eq!(route.description()[0], "Head N on E19 and continue for 41 km");
    }

    #[test]
    fn rejects_short_paths() {
        let err = Route::new(vec![1], HashMap::new(), HashMap::from([(1, Point::new(0.0, 0.0))]))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedPath(_)));
    }

    #[test]
    fn rejects_missing_edge() {
        let nodes = HashMap::from([
            (1, Point::new(0.0, 0.0)),
            (2, Point::new(0.0, 0.001)),
            (3, Point::new(0.0, 0.002)),
        ]);
        let edges = HashMap::from([((1, 2), EdgeAttributes::unnamed(10.0))]);
        let err = Route::new(vec![1, 2, 3], edges, nodes).unwrap_err();
        assert!(matches!(err, Error::MalformedPath(msg) if msg.contains("2 to node 3")));
    }

    #[test]
    fn rejects_missing_node() {
        let nodes = HashMap::from([(1, Point::new(0.0, 0.0))]);
        let edges = HashMap::from([((1, 2), EdgeAttributes::unnamed(10.0))]);
        let err = Route::new(vec![1, 2], edges, nodes).unwrap_err();
        assert!(matches!(err, Error::MalformedPath(msg) if msg.contains("node 2")));
    }

    #[test]
    fn rejects_negative_length() {
        let err = route_through(
            &[(0.0, 0.0), (0.0, 0.001)],
            &[(-1.0, StreetName::Unnamed)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedPath(_)));
    }

    #[test]
    fn route_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Route>();
    }
}
