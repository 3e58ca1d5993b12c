//! Trip request: origin, destination and mode of transport.
//!
//! Gives the network provider what it needs to fetch a street network, a
//! center and a radius, without doing any address lookup itself.

use std::{fmt, str::FromStr};

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    geometry::{great_circle_distance, great_circle_halfway_point},
};

/// Street network flavour to route on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    AllPublic,
    Bike,
    #[default]
    Drive,
    DriveService,
    Walk,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        Self::AllPublic,
        Self::Bike,
        Self::Drive,
        Self::DriveService,
        Self::Walk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::AllPublic => "all_public",
            Self::Bike => "bike",
            Self::Drive => "drive",
            Self::DriveService => "drive_service",
            Self::Walk => "walk",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| Error::InvalidData(format!("invalid transport mode {s:?}")))
    }
}

/// Origin and destination of a trip, x = longitude, y = latitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripConfig {
    pub origin: Point<f64>,
    pub destination: Point<f64>,
    #[serde(default)]
    pub transport_mode: TransportMode,
}

impl TripConfig {
    pub fn new(origin: Point<f64>, destination: Point<f64>, transport_mode: TransportMode) -> Self {
        Self {
            origin,
            destination,
            transport_mode,
        }
    }

    /// Parses and validates a trip from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed documents and
    /// [`Error::InvalidData`] for out-of-range coordinates.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: TripConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both endpoints are valid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] naming the offending endpoint.
    pub fn validate(&self) -> Result<(), Error> {
        validate_point("origin", &self.origin)?;
        validate_point("destination", &self.destination)
    }

    /// Great-circle distance between the endpoints, in kilometers
    pub fn crow_flies_distance_km(&self) -> f64 {
        great_circle_distance(
            self.origin.y(),
            self.origin.x(),
            self.destination.y(),
            self.destination.x(),
        )
    }

    /// `(latitude, longitude)` halfway along the great circle between the endpoints
    pub fn midway_coordinate(&self) -> (f64, f64) {
        great_circle_halfway_point(
            self.origin.y(),
            self.origin.x(),
            self.destination.y(),
            self.destination.x(),
        )
    }

    /// Radius around [`Self::midway_coordinate`] covering both endpoints
    /// plus one kilometer of slack, in meters
    pub fn network_radius_m(&self) -> f64 {
        1000.0 * (self.crow_flies_distance_km() / 2.0 + 1.0)
    }
}

fn validate_point(label: &str, point: &Point<f64>) -> Result<(), Error> {
    let (lon, lat) = point.x_y();
    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::InvalidData(format!("{label} latitude {lat} out of range")));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(Error::InvalidData(format!("{label} longitude {lon} out of range")));
    }
    Ok(())
}
