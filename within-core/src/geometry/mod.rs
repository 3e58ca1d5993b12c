//! Spherical geometry used to describe routes: distances, midpoints,
//! bearings, compass directions and turn classification.

pub mod compass;
pub mod spherical;
pub mod turn;

pub use compass::{CardinalDirection, cardinal_direction};
pub use spherical::{
    EARTH_RADIUS_KM, bearing, great_circle_distance, great_circle_distance_with_radius,
    great_circle_halfway_point, point_bearing, point_distance_km,
};
pub use turn::{Side, TurnInstruction, turning_angle, turning_instruction};
