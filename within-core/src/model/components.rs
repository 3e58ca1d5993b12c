//! Path components - nodes and edges as handed over by the network provider

use geo::Point;
use serde::Serialize;

use super::StreetName;
use crate::NodeId;

/// Graph node on a path
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    /// Node identifier in the source network (OSM node id)
    pub id: NodeId,
    /// Node coordinates, x = longitude, y = latitude
    pub geometry: Point<f64>,
}

impl PathNode {
    pub fn new(id: NodeId, lon: f64, lat: f64) -> Self {
        Self {
            id,
            geometry: Point::new(lon, lat),
        }
    }
}

/// Attributes of a directed street edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeAttributes {
    /// Edge length in meters
    pub length: f64,
    pub name: StreetName,
}

impl EdgeAttributes {
    pub fn new(length: f64, name: impl Into<StreetName>) -> Self {
        Self {
            length,
            name: name.into(),
        }
    }

    pub fn unnamed(length: f64) -> Self {
        Self {
            length,
            name: StreetName::Unnamed,
        }
    }
}
