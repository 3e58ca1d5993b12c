//! Turn classification from the change of heading between two segments

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Maneuver needed to go from one heading to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnInstruction {
    /// |angle| < 30
    ContinueStraight,
    /// 30 <= |angle| < 60
    Bear(Side),
    /// 60 <= |angle| < 110
    Turn(Side),
    /// 110 <= |angle| < 170
    VerySharp(Side),
    /// |angle| >= 170
    UTurn,
}

impl fmt::Display for TurnInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnInstruction::ContinueStraight => f.write_str("Continue straight"),
            TurnInstruction::Bear(side) => write!(f, "Bear {side}"),
            TurnInstruction::Turn(side) => write!(f, "Turn {side}"),
            TurnInstruction::VerySharp(side) => write!(f, "Turn a very sharp {side}"),
            TurnInstruction::UTurn => f.write_str("Make a U-turn"),
        }
    }
}

/// Signed heading change in `(-180, 180]`; negative turns left
pub fn turning_angle(current_bearing: f64, next_bearing: f64) -> f64 {
    let delta = (next_bearing - current_bearing + 360.0).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Classifies the turn from `current_bearing` onto `next_bearing` (degrees).
pub fn turning_instruction(current_bearing: f64, next_bearing: f64) -> TurnInstruction {
    let angle = turning_angle(current_bearing, next_bearing);
    let side = if angle < 0.0 { Side::Left } else { Side::Right };

    match angle.abs() {
        a if a < 30.0 => TurnInstruction::ContinueStraight,
        a if a < 60.0 => TurnInstruction::Bear(side),
        a if a < 110.0 => TurnInstruction::Turn(side),
        a if a < 170.0 => TurnInstruction::VerySharp(side),
        _ => TurnInstruction::UTurn,
    }
}
