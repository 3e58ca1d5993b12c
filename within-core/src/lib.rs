//! Turn-by-turn route descriptions over street network paths.
//!
//! The crate consumes a finished path (node sequence, per-edge attributes
//! and per-node coordinates) and derives its total length and a
//! human-readable narrative. It also exposes the spherical geometry the
//! narrative is built on. Path search and address lookup are left to
//! external providers.

pub mod description;
pub mod error;
pub mod geometry;
pub mod model;
pub mod network;
pub mod prelude;
pub mod route;
pub mod trip;

pub use description::{ARRIVAL_LINE, Instruction, InstructionKind};
pub use error::Error;
pub use model::{EdgeAttributes, PathNode, StreetName};
pub use network::StreetNetwork;
pub use route::{Route, RouteData};
pub use trip::{TransportMode, TripConfig};

/// Node identifier in the source street network (OSM node id)
pub type NodeId = i64;
