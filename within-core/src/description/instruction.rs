use std::fmt;

use serde::Serialize;

use super::format_distance;
use crate::geometry::{CardinalDirection, TurnInstruction};

/// How a segment is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionKind {
    /// First segment of the route
    Depart,
    /// Any later segment, entered with a maneuver
    Turn(TurnInstruction),
}

/// A single turn-by-turn instruction covering one street segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    /// Joined street name of the segment
    pub street: String,
    /// Bearing of the edge that opens the segment
    pub bearing: f64,
    pub direction: CardinalDirection,
    /// Accumulated length of the segment in meters
    pub distance_m: f64,
    /// Position in the node sequence where the segment starts
    pub start_index: usize,
    /// Position in the node sequence where the segment ends
    pub end_index: usize,
}

impl Instruction {
    pub fn edge_count(&self) -> usize {
        self.end_index - self.start_index
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InstructionKind::Depart => write!(
                f,
                "Head {} on {} and continue for {}",
                self.direction,
                self.street,
                format_distance(self.distance_m)
            ),
            InstructionKind::Turn(turn) => write!(
                f,
                "{turn} on {} ({}) and continue for {}",
                self.street,
                self.direction,
                format_distance(self.distance_m)
            ),
        }
    }
}
