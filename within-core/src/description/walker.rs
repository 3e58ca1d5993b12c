//! Segment merging over consecutive edges.
//!
//! Consecutive edges whose joined street names are equal collapse into one
//! segment. A segment is closed when an edge on a different street arrives
//! or when the walk is finished, and each closed segment becomes one
//! [`Instruction`].

use log::trace;

use super::{Instruction, InstructionKind};
use crate::geometry::{cardinal_direction, turning_instruction};

/// One edge of the path, reduced to what the description needs
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStep {
    /// Joined street name
    pub street: String,
    /// Bearing from the edge's source to its target, in degrees
    pub bearing: f64,
    /// Edge length in meters
    pub length_m: f64,
}

/// Segment currently being accumulated
#[derive(Debug, Clone)]
struct OpenSegment {
    street: String,
    bearing: f64,
    distance_m: f64,
    start_index: usize,
}

/// State machine threading the current street, its bearing and the
/// accumulated distance through a single forward pass.
#[derive(Debug, Default)]
pub struct SegmentWalker {
    open: Option<OpenSegment>,
    /// Bearing of the last closed segment; `None` until the first one closes
    previous_bearing: Option<f64>,
    edges_seen: usize,
}

impl SegmentWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next edge of the path.
    ///
    /// Returns the instruction for the segment this edge closes, if any.
    pub fn push(&mut self, step: EdgeStep) -> Option<Instruction> {
        let edge_index = self.edges_seen;
        self.edges_seen += 1;

        if let Some(open) = self.open.as_mut()
            && open.street == step.street
        {
            open.distance_m += step.length_m;
            return None;
        }

        let closed = self.open.take().map(|segment| self.close(segment, edge_index));
        self.open = Some(OpenSegment {
            street: step.street,
            bearing: step.bearing,
            distance_m: step.length_m,
            start_index: edge_index,
        });
        closed
    }

    /// Closes the last open segment. Returns `None` if no edge was pushed.
    pub fn finish(mut self) -> Option<Instruction> {
        let end_index = self.edges_seen;
        self.open
            .take()
            .map(|segment| self.close(segment, end_index))
    }

    fn close(&mut self, segment: OpenSegment, end_index: usize) -> Instruction {
        let kind = match self.previous_bearing {
            None => InstructionKind::Depart,
            Some(previous) => InstructionKind::Turn(turning_instruction(previous, segment.bearing)),
        };
        self.previous_bearing = Some(segment.bearing);

        trace!(
            "Segment {}..{} on {} ({:.1} m)",
            segment.start_index, end_index, segment.street, segment.distance_m
        );

        Instruction {
            kind,
            direction: cardinal_direction(segment.bearing),
            street: segment.street,
            bearing: segment.bearing,
            distance_m: segment.distance_m,
            start_index: segment.start_index,
            end_index,
        }
    }
}

/// Runs a [`SegmentWalker`] over all edges of a path.
pub fn merge_segments<I>(steps: I) -> Vec<Instruction>
where
    I: IntoIterator<Item = EdgeStep>,
{
    let mut walker = SegmentWalker::new();
    let mut instructions: Vec<Instruction> = steps
        .into_iter()
        .filter_map(|step| walker.push(step))
        .collect();
    instructions.extend(walker.finish());
    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Side, TurnInstruction};

    fn step(street: &str, bearing: f64, length_m: f64) -> EdgeStep {
        EdgeStep {
            street: street.to_string(),
            bearing,
            length_m,
        }
    }

    #[test]
    fn empty_walk_yields_nothing() {
        assert!(merge_segments(Vec::new()).is_empty());
    }

    #[test]
    fn single_edge_is_a_departure() {
        let instructions = merge_segments([step("Elm St", 0.0, 500.0)]);
        assert_eq!(instructions.len(), 1);
        assert_eq!(instructions[0].kind, InstructionKind::Depart);
        assert_eq!(
            instructions[0].to_string(),
            "Head N on Elm St and continue for 500 m"
        );
        assert_eq!((instructions[0].start_index, instructions[0].end_index), (0, 1));
    }

    #[test]
    fn same_street_edges_are_merged() {
        let instructions = merge_segments([
            step("Main St", 0.0, 100.0),
            step("Main St", 5.0, 200.0),
            step("Main St", 355.0, 300.0),
            step("Oak Ave", 90.0, 50.0),
        ]);
        assert_eq!(instructions.len(), 2);

        let main = &instructions[0];
        assert_eq!(main.distance_m, 600.0);
        assert_eq!(main.edge_count(), 3);
        assert_eq!(main.to_string(), "Head N on Main St and continue for 600 m");

        let oak = &instructions[1];
        assert_eq!(oak.kind, InstructionKind::Turn(TurnInstruction::Turn(Side::Right)));
        assert_eq!(oak.to_string(), "Turn right on Oak Ave (E) and continue for 50 m");
        assert_eq!((oak.start_index, oak.end_index), (3, 4));
    }

    #[test]
    fn turn_compares_segment_bearings() {
        // The second Main St edge curves, the turn is measured from the
        // bearing the segment was entered with
        let instructions = merge_segments([
            step("Main St", 0.0, 100.0),
            step("Main St", 80.0, 100.0),
            step("Oak Ave", 270.0, 100.0),
        ]);
        assert_eq!(
            instructions[1].kind,
            InstructionKind::Turn(TurnInstruction::Turn(Side::Left))
        );
    }

    #[test]
    fn returning_to_a_street_opens_a_new_segment() {
        let instructions = merge_segments([
            step("A", 0.0, 10.0),
            step("B", 90.0, 10.0),
            step("A", 0.0, 10.0),
        ]);
        let streets: Vec<_> = instructions.iter().map(|i| i.street.as_str()).collect();
        assert_eq!(streets, ["A", "B", "A"]);
        assert_eq!(instructions[2].to_string(), "Turn left on A (N) and continue for 10 m");
    }

    #[test]
    fn push_reports_closed_segment() {
        let mut walker = SegmentWalker::new();
        assert!(walker.push(step("A", 0.0, 10.0)).is_none());
        assert!(walker.push(step("A", 0.0, 10.0)).is_none());
        let closed = walker.push(step("B", 180.0, 5.0)).unwrap();
        assert_eq!(closed.street, "A");
        assert_eq!(closed.distance_m, 20.0);
        let last = walker.finish().unwrap();
        assert_eq!(last.to_string(), "Make a U-turn on B (S) and continue for 5 m");
    }
}
