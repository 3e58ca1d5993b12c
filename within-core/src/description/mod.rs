//! Turn-by-turn narrative for a path.
//!
//! The path is walked once, edge by edge. Runs of edges on the same street
//! are merged and every street change produces one instruction. The
//! narrative always ends with [`ARRIVAL_LINE`].

mod format;
mod instruction;
mod walker;

pub use format::format_distance;
pub use instruction::{Instruction, InstructionKind};
pub use walker::{EdgeStep, SegmentWalker, merge_segments};

/// Fixed last line of every description
pub const ARRIVAL_LINE: &str = "Arriving at your destination.";

/// Renders instructions as text lines, followed by the arrival line.
pub fn render(instructions: &[Instruction]) -> Vec<String> {
    instructions
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(ARRIVAL_LINE.to_string()))
        .collect()
}

/// Describes a path given as a sequence of edges.
pub fn describe<I>(steps: I) -> Vec<String>
where
    I: IntoIterator<Item = EdgeStep>,
{
    render(&merge_segments(steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_line_is_always_last() {
        let lines = describe([EdgeStep {
            street: "Elm St".to_string(),
            bearing: 0.0,
            length_m: 500.0,
        }]);
        assert_eq!(
            lines,
            [
                "Head N on Elm St and continue for 500 m",
                "Arriving at your destination."
            ]
        );
    }
}
