//! Street network snapshots.
//!
//! Path search lives outside of this crate. A provider loads the network,
//! computes node paths with its own algorithm and uses [`StreetNetwork`] to
//! turn each path into a self-contained [`Route`].

use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use rayon::prelude::*;

use crate::{
    Error, NodeId, Route,
    model::{EdgeAttributes, PathNode},
};

pub type StreetGraph = DiGraph<PathNode, EdgeAttributes>;

/// Directed street graph indexed by source node identifiers
#[derive(Debug, Clone, Default)]
pub struct StreetNetwork {
    graph: StreetGraph,
    index: HashMap<NodeId, NodeIndex>,
}

impl StreetNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, or moves an existing one to the new coordinates.
    pub fn add_node(&mut self, node: PathNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.id) {
            self.graph[idx] = node;
            return idx;
        }
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    /// Adds a directed edge between two known nodes.
    ///
    /// Parallel edges are kept, as in multigraph street data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if either node was not added before.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, edge: EdgeAttributes) -> Result<(), Error> {
        let source = self.node_index(from)?;
        let target = self.node_index(to)?;
        self.graph.add_edge(source, target, edge);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn graph(&self) -> &StreetGraph {
        &self.graph
    }

    pub fn node(&self, id: NodeId) -> Option<&PathNode> {
        self.index.get(&id).map(|&idx| &self.graph[idx])
    }

    fn node_index(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.index
            .get(&id)
            .copied()
            .ok_or_else(|| Error::InvalidData(format!("unknown node {id}")))
    }

    /// Shortest of the possibly parallel edges from `from` to `to`
    fn shortest_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<&EdgeAttributes> {
        self.graph
            .edges_connecting(from, to)
            .map(|edge| edge.weight())
            .min_by(|a, b| a.length.total_cmp(&b.length))
    }

    /// Copies the edges and nodes along `path` into a [`Route`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] if the path visits an unknown node or
    /// uses a pair of nodes that is not connected in travel direction.
    pub fn route_from_path(&self, path: &[NodeId]) -> Result<Route, Error> {
        let mut nodes = HashMap::with_capacity(path.len());
        for &id in path {
            let node = self
                .node(id)
                .ok_or_else(|| Error::MalformedPath(format!("node {id} is not in the network")))?;
            nodes.insert(id, node.geometry);
        }

        let mut edges = HashMap::with_capacity(path.len().saturating_sub(1));
        for (&from, &to) in path.iter().tuple_windows() {
            let edge = self
                .shortest_edge(self.node_index(from)?, self.node_index(to)?)
                .ok_or_else(|| {
                    Error::MalformedPath(format!("no edge from node {from} to node {to}"))
                })?;
            edges.insert((from, to), edge.clone());
        }

        Route::new(path.to_vec(), edges, nodes)
    }

    /// Builds routes for several paths in parallel, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails with the first error encountered by [`Self::route_from_path`].
    pub fn routes_from_paths(&self, paths: &[Vec<NodeId>]) -> Result<Vec<Route>, Error> {
        debug!("Building {} routes", paths.len());
        paths
            .par_iter()
            .map(|path| self.route_from_path(path))
            .collect()
    }
}

impl FromIterator<PathNode> for StreetNetwork {
    fn from_iter<T: IntoIterator<Item = PathNode>>(iter: T) -> Self {
        let mut network = StreetNetwork::new();
        for node in iter {
            network.add_node(node);
        }
        network
    }
}

/// Sorts routes by total length, shortest first
pub fn shortest_first(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(|a, b| a.total_length_m().total_cmp(&b.total_length_m()));
    routes
}
