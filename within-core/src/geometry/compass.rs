//! 16-point compass rose

use std::fmt;

use serde::Serialize;

/// One of the 16 compass-rose labels
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardinalDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CardinalDirection {
    /// All directions clockwise, starting from north
    pub const ALL: [CardinalDirection; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bins a bearing in degrees into one of 16 compass directions.
///
/// Sector `k` (1-based) ends strictly before `(k - 0.5) / 16 * 360` degrees,
/// so a bearing sitting exactly on a boundary belongs to the next sector
/// clockwise. Anything at or past the last boundary wraps back to north.
#[allow(clippy::cast_precision_loss)]
pub fn cardinal_direction(bearing_degrees: f64) -> CardinalDirection {
    CardinalDirection::ALL
        .iter()
        .enumerate()
        .find(|(idx, _)| bearing_degrees < (*idx as f64 + 0.5) / 16.0 * 360.0)
        .map_or(CardinalDirection::N, |(_, direction)| *direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_sample_bearings() {
        let cases = [
            (0.0, "N"),
            (22.0, "NNE"),
            (45.0, "NE"),
            (67.0, "ENE"),
            (90.0, "E"),
            (112.0, "ESE"),
            (135.0, "SE"),
            (159.0, "SSE"),
            (180.0, "S"),
            (200.0, "SSW"),
            (225.0, "SW"),
            (250.0, "WSW"),
            (270.0, "W"),
            (292.0, "WNW"),
            (315.0, "NW"),
            (340.0, "NNW"),
            (359.0, "N"),
        ];
        for (bearing, expected) in cases {
            assert_eq!(
                cardinal_direction(bearing).to_string(),
                expected,
                "bearing {bearing}"
            );
        }
    }

    #[test]
    fn boundaries_belong_to_the_clockwise_sector() {
        assert_eq!(cardinal_direction(11.249), CardinalDirection::N);
        assert_eq!(cardinal_direction(11.25), CardinalDirection::NNE);
        assert_eq!(cardinal_direction(348.75), CardinalDirection::N);
        assert_eq!(cardinal_direction(348.7), CardinalDirection::NNW);
    }
}
