// Re-export key components
pub use crate::description::{ARRIVAL_LINE, Instruction, InstructionKind, format_distance};
pub use crate::geometry::{
    CardinalDirection, EARTH_RADIUS_KM, Side, TurnInstruction, bearing, cardinal_direction,
    great_circle_distance, great_circle_distance_with_radius, great_circle_halfway_point,
    turning_instruction,
};
pub use crate::model::{EdgeAttributes, PathNode, StreetName};
pub use crate::network::{StreetNetwork, shortest_first};
pub use crate::route::{Route, RouteData};
pub use crate::trip::{TransportMode, TripConfig};

// Core types
pub use crate::Error;
pub use crate::NodeId;
